//! Utility functions.

pub mod target;
pub mod template;

pub use template::{render_welcome, WelcomeContext, DEFAULT_WELCOME};

/// Escape special characters for Telegram HTML parse mode.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline HTML mention link for a user.
pub fn mention_html(user_id: u64, name: &str) -> String {
    format!("<a href=\"tg://user?id={}\">{}</a>", user_id, html_escape(name))
}

/// Arguments of a command message (everything after the command word).
pub fn command_args(text: &str) -> Vec<&str> {
    text.split_whitespace().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_command_args() {
        assert_eq!(command_args("/lock url extra"), vec!["url", "extra"]);
        assert!(command_args("/locks").is_empty());
    }
}

//! Welcome message templating.
//!
//! Templates substitute a fixed set of placeholders. A custom template
//! containing an unrecognized placeholder falls back to the built-in
//! default instead of erroring at the new member.

use super::html_escape;

/// Built-in welcome template used when no custom message is set or a
/// custom template cannot be rendered.
pub const DEFAULT_WELCOME: &str = "👋 Welcome {first_name} to {title}!";

/// Values the placeholders expand to, pre-escaped for HTML parse mode.
pub struct WelcomeContext {
    pub first_name: String,
    /// `@username`, or the first name when the user has none.
    pub username: String,
    /// Inline mention link (`tg://user?id=...`).
    pub mention: String,
    pub title: String,
}

impl WelcomeContext {
    pub fn new(user: &teloxide::types::User, chat_title: &str) -> Self {
        let first_name = html_escape(&user.first_name);
        let username = user
            .username
            .as_ref()
            .map(|u| format!("@{}", html_escape(u)))
            .unwrap_or_else(|| first_name.clone());

        Self {
            first_name,
            username,
            mention: super::mention_html(user.id.0, &user.first_name),
            title: html_escape(chat_title),
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "first_name" => Some(&self.first_name),
            "username" => Some(&self.username),
            "mention" => Some(&self.mention),
            "title" => Some(&self.title),
            _ => None,
        }
    }
}

/// Render a welcome message. `template` is the chat's custom template, if
/// any; an unrecognized placeholder in it triggers the default fallback.
pub fn render_welcome(template: Option<&str>, ctx: &WelcomeContext) -> String {
    template
        .and_then(|t| try_render(t, ctx).ok())
        .unwrap_or_else(|| {
            // The default template only uses recognized placeholders.
            try_render(DEFAULT_WELCOME, ctx).expect("default template must render")
        })
}

/// Substitute `{placeholder}` tokens, failing on the first unknown one.
///
/// Braces that do not wrap a plain identifier pass through literally.
/// Literal text is HTML-escaped here (the output is sent in HTML parse
/// mode, and a stray `<` in a stored template would make every greeting
/// fail to send); placeholder values arrive pre-escaped from the context.
fn try_render(template: &str, ctx: &WelcomeContext) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&html_escape(&rest[..open]));
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                let key = &after[..close];
                match ctx.lookup(key) {
                    Some(value) => out.push_str(value),
                    None => return Err(key.to_string()),
                }
                rest = &after[close + 1..];
            }
            _ => {
                // Lone or malformed brace: keep it as-is.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(&html_escape(rest));
    Ok(out)
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> WelcomeContext {
        WelcomeContext {
            first_name: "Ann".to_string(),
            username: "@ann".to_string(),
            mention: "<a href=\"tg://user?id=7\">Ann</a>".to_string(),
            title: "Rustaceans".to_string(),
        }
    }

    #[test]
    fn test_render_known_placeholders() {
        assert_eq!(render_welcome(Some("Hi {first_name}!"), &ctx()), "Hi Ann!");
        assert_eq!(
            render_welcome(Some("{username} joined {title}"), &ctx()),
            "@ann joined Rustaceans"
        );
    }

    #[test]
    fn test_unknown_placeholder_falls_back_to_default() {
        assert_eq!(
            render_welcome(Some("Hi {bogus}!"), &ctx()),
            "👋 Welcome Ann to Rustaceans!"
        );
    }

    #[test]
    fn test_no_custom_template_uses_default() {
        assert_eq!(render_welcome(None, &ctx()), "👋 Welcome Ann to Rustaceans!");
    }

    #[test]
    fn test_literal_braces_pass_through() {
        assert_eq!(
            render_welcome(Some("brace { not a tag }"), &ctx()),
            "brace { not a tag }"
        );
        assert_eq!(render_welcome(Some("trailing {"), &ctx()), "trailing {");
    }

    #[test]
    fn test_mention_renders_link() {
        let rendered = render_welcome(Some("{mention}"), &ctx());
        assert!(rendered.contains("tg://user?id=7"));
    }

    #[test]
    fn test_literal_markup_is_escaped() {
        // Raw angle brackets in a stored template would be rejected by
        // the platform's HTML parser on every greeting.
        assert_eq!(
            render_welcome(Some("hi <b>{first_name}</b>"), &ctx()),
            "hi &lt;b&gt;Ann&lt;/b&gt;"
        );
        // Placeholder values keep their own markup.
        assert_eq!(
            render_welcome(Some("<{mention}>"), &ctx()),
            "&lt;<a href=\"tg://user?id=7\">Ann</a>&gt;"
        );
    }
}

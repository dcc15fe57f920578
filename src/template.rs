//! `${name}` placeholder substitution.
//!
//! Values are inserted verbatim. Nothing is HTML-escaped, so a post body
//! carrying markup (or script) ends up in the output as-is.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Flat placeholder-name to value mapping, built per post.
pub type RenderContext = HashMap<String, String>;

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\$\{\s*([A-Za-z_][A-Za-z0-9_-]*)\s*\}").expect("placeholder pattern is valid")
    })
}

/// Replace every `${name}` whose name is in `context`. Unknown placeholders
/// are left untouched and substituted values are never re-scanned.
pub fn substitute(template: &str, context: &RenderContext) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| match context.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// A template string kept around for repeated rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, context: &RenderContext) -> String {
        substitute(&self.source, context)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::new(source)
    }
}

/// Build a [`RenderContext`] from `key => value` pairs.
#[macro_export]
macro_rules! render_context {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut ctx = $crate::template::RenderContext::new();
        $( ctx.insert($key.to_string(), $value.to_string()); )*
        ctx
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_placeholders() {
        let ctx = render_context!("title" => "Hello", "body" => "World");
        assert_eq!(
            substitute("<h1>${title}</h1><p>${body}</p>", &ctx),
            "<h1>Hello</h1><p>World</p>"
        );
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let ctx = render_context!("title" => "Hello");
        assert_eq!(
            substitute("${title} ${missing} $title {title}", &ctx),
            "Hello ${missing} $title {title}"
        );
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let ctx = render_context!("x" => "1");
        assert_eq!(substitute("${x}-${x}-${x}", &ctx), "1-1-1");
    }

    #[test]
    fn test_substitute_tolerates_inner_whitespace() {
        let ctx = render_context!("name" => "v");
        assert_eq!(substitute("[${ name }] [${name  }]", &ctx), "[v] [v]");
    }

    #[test]
    fn test_values_are_not_rescanned_or_escaped() {
        let ctx = render_context!("a" => "${b}", "b" => "<script>x</script>");
        assert_eq!(substitute("${a}|${b}", &ctx), "${b}|<script>x</script>");
    }

    #[test]
    fn test_values_with_dollar_signs() {
        let ctx = render_context!("price" => "$1 and $2");
        assert_eq!(substitute("cost: ${price}", &ctx), "cost: $1 and $2");
    }

    #[test]
    fn test_empty_context_is_identity() {
        let source = "<div>${a}${b}</div>";
        assert_eq!(substitute(source, &RenderContext::new()), source);
    }

    #[test]
    fn test_template_render() {
        let template: Template = "<b>${v}</b>".into();
        assert_eq!(template.render(&render_context!("v" => 3)), "<b>3</b>");
        assert_eq!(template.source(), "<b>${v}</b>");
    }
}

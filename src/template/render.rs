//! Mustache-style template rendering over a variable map

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::escape::EscapeStrategy;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").unwrap());

/// Template renderer with an explicit escape strategy
///
/// Substitutes `{{name}}` tokens from a variable map, passing each value
/// through the configured [`EscapeStrategy`]. Request rendering constructs
/// this with [`Renderer::identity`] so substituted values keep their exact
/// byte content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    strategy: EscapeStrategy,
}

impl Renderer {
    /// Create a renderer with the given escape strategy.
    pub fn new(strategy: EscapeStrategy) -> Self {
        Self { strategy }
    }

    /// Create a renderer that substitutes values unmodified.
    pub fn identity() -> Self {
        Self::new(EscapeStrategy::Identity)
    }

    /// The strategy this renderer applies.
    pub fn strategy(&self) -> EscapeStrategy {
        self.strategy
    }

    /// Render a template against a variable map.
    ///
    /// Tokens naming a missing variable render as the empty string.
    pub fn render(&self, template: &str, vars: &HashMap<String, String>) -> String {
        TOKEN_PATTERN
            .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
                Some(value) => self.strategy.escape(value).into_owned(),
                None => String::new(),
            })
            .into_owned()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_tokens() {
        let renderer = Renderer::identity();
        let rendered = renderer.render(
            "https://{{host}}/users/{{ id }}",
            &vars(&[("host", "api.example.com"), ("id", "42")]),
        );
        assert_eq!(rendered, "https://api.example.com/users/42");
    }

    #[test]
    fn test_identity_keeps_special_characters() {
        let renderer = Renderer::identity();
        let rendered = renderer.render(
            "q={{filter}}",
            &vars(&[("filter", "a&b <c> \"d\"")]),
        );
        assert_eq!(rendered, "q=a&b <c> \"d\"");
    }

    #[test]
    fn test_html_strategy_escapes_substituted_values() {
        let renderer = Renderer::new(EscapeStrategy::Html);
        let rendered = renderer.render("{{v}}", &vars(&[("v", "<x>")]));
        assert_eq!(rendered, "&lt;x&gt;");
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        let renderer = Renderer::identity();
        assert_eq!(renderer.render("a{{gone}}b", &vars(&[])), "ab");
    }

    #[test]
    fn test_template_text_is_never_escaped() {
        // Only substituted values go through the strategy.
        let renderer = Renderer::new(EscapeStrategy::Html);
        assert_eq!(renderer.render("<p>{{v}}</p>", &vars(&[("v", "x")])), "<p>x</p>");
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Renderer::default().strategy(), EscapeStrategy::Identity);
    }
}

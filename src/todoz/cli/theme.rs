//! Named styles and the template renderer that applies them.
//!
//! Templates never contain ANSI codes. They name a style through the `style`
//! filter (`{{ text | style("done") }}`) and the renderer decides, once, whether
//! that means escape codes or plain text. A style name missing from the theme
//! renders with a visible `(!?)` marker so typos show up in output instead of
//! failing silently.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout can show colors (false for pipes, `TERM=dumb`, ...).
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// A template environment with the `style` filter bound to one theme.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// `use_color: None` detects terminal support.
    pub fn new(theme: &Theme, use_color: Option<bool>) -> Self {
        let use_color = use_color.unwrap_or_else(colors_supported);
        let theme = theme.clone();

        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Self { env }
    }

    /// Registers a named template, compiling it right away.
    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Data {
        word: String,
    }

    fn renderer(use_color: bool) -> Renderer {
        let theme = Theme::new().add("loud", Style::new().red().bold());
        let mut renderer = Renderer::new(&theme, Some(use_color));
        renderer
            .add_template("loud", r#"{{ word | style("loud") }}"#)
            .unwrap();
        renderer
            .add_template("typo", r#"{{ word | style("lowd") }}"#)
            .unwrap();
        renderer
    }

    fn data() -> Data {
        Data {
            word: "hello".into(),
        }
    }

    #[test]
    fn plain_when_color_disabled() {
        let output = renderer(false).render("loud", &data()).unwrap();
        assert_eq!(output, "hello");
    }

    #[test]
    fn ansi_when_color_forced() {
        let output = renderer(true).render("loud", &data()).unwrap();
        assert!(output.contains("hello"));
        assert!(output.contains("\u{1b}["));
    }

    #[test]
    fn missing_style_is_marked() {
        let output = renderer(false).render("typo", &data()).unwrap();
        assert_eq!(output, "(!?) hello");
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(renderer(false).render("nope", &data()).is_err());
    }
}

//! Diagnostic text rendering for elements.
//!
//! The output resembles the text form of the data format but is meant for
//! logs, test failures and debugging. It is not an encoding and does not
//! round-trip.

use std::fmt::{self, Write};

use crate::element::{Element, ElementValue};

/// Controls how [`Element`]s are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Append each element's metas as a trailing comment.
    pub show_metas: bool,

    /// Nesting depth beyond which children are elided as `...`.
    pub max_depth: Option<usize>,

    /// Separator between list items and struct fields.
    pub separator: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_metas: false,
            max_depth: None,
            separator: ", ",
        }
    }
}

impl RenderConfig {
    /// Configuration that also shows metas.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            show_metas: true,
            ..Self::default()
        }
    }

    /// Configuration with minimal whitespace.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            separator: ",",
            ..Self::default()
        }
    }

    /// Builder method to show or hide metas.
    #[must_use]
    pub fn with_show_metas(mut self, show_metas: bool) -> Self {
        self.show_metas = show_metas;
        self
    }

    /// Builder method to limit nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Builder method to set the item separator.
    #[must_use]
    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }
}

/// An element paired with a [`RenderConfig`], ready for formatting.
pub struct Rendered<'a> {
    element: &'a Element,
    config: &'a RenderConfig,
}

impl Element {
    /// Returns a displayable view of this element using `config`.
    #[must_use]
    pub fn render<'a>(&'a self, config: &'a RenderConfig) -> Rendered<'a> {
        Rendered {
            element: self,
            config,
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self.element, self.config, 0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self, &RenderConfig::default(), 0)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self, &RenderConfig::verbose(), 0)
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !matches!(text, "null" | "true" | "false" | "nan")
}

fn write_symbol(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if is_identifier(text) {
        return f.write_str(text);
    }
    f.write_char('\'')?;
    for c in text.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("nan")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "+inf" } else { "-inf" })
    } else {
        write!(f, "{n:e}")
    }
}

fn write_element(
    f: &mut fmt::Formatter<'_>,
    element: &Element,
    config: &RenderConfig,
    depth: usize,
) -> fmt::Result {
    if config.max_depth.is_some_and(|max| depth > max) {
        return f.write_str("...");
    }

    for annotation in element.annotations().iter() {
        write_symbol(f, annotation)?;
        f.write_str("::")?;
    }

    match element.value() {
        ElementValue::Null => f.write_str("null")?,
        ElementValue::Bool(b) => write!(f, "{b}")?,
        ElementValue::Int(n) => write!(f, "{n}")?,
        ElementValue::Float(n) => write_float(f, *n)?,
        ElementValue::Decimal(d) => write!(f, "{d}")?,
        ElementValue::Timestamp(t) => write!(f, "{t}")?,
        ElementValue::Symbol(s) => write_symbol(f, s)?,
        ElementValue::String(s) => write!(f, "{s:?}")?,
        ElementValue::Clob(b) => write!(f, "{{{{\"{}\"}}}}", b.escape_ascii())?,
        ElementValue::Blob(b) => write!(f, "{{{{<{} bytes>}}}}", b.len())?,
        ElementValue::List(values) => {
            f.write_char('[')?;
            for (i, child) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(config.separator)?;
                }
                write_element(f, child, config, depth + 1)?;
            }
            f.write_char(']')?;
        }
        ElementValue::Sexp(values) => {
            f.write_char('(')?;
            for (i, child) in values.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write_element(f, child, config, depth + 1)?;
            }
            f.write_char(')')?;
        }
        ElementValue::Struct(fields) => {
            f.write_char('{')?;
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(config.separator)?;
                }
                write_symbol(f, field.name())?;
                f.write_str(": ")?;
                write_element(f, field.value(), config, depth + 1)?;
            }
            f.write_char('}')?;
        }
    }

    if config.show_metas && !element.metas().is_empty() {
        write!(f, " /* {:?} */", element.metas())?;
    }
    Ok(())
}

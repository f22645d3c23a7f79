//! Expression nodes and their textual form.

use serde::Serialize;
use std::fmt::{self, Display, Write};

/// How a comment node is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Every line prefixed with `;;; `.
    Line,
    /// Wrapped in `#|` and `|#` on their own lines.
    Block,
}

/// A YAIL expression.
///
/// Printing is pure and deterministic: the same tree always renders to the
/// same bytes through [`Display`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Literal text emitted as-is (numbers, `#t`, `#x1F`).
    Atom(String),
    /// Identifier emitted as-is.
    Symbol(String),
    /// `'` followed by the inner expression.
    Quote(Box<Expr>),
    /// Double-quoted string literal.
    String(String),
    List(Vec<Expr>),
    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Option<Box<Expr>>,
    },
    Begin(Vec<Expr>),
    Let {
        bindings: Vec<(String, Expr)>,
        body: Box<Expr>,
    },
    Comment { text: String, style: CommentStyle },
}

impl Expr {
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(text.into())
    }

    /// Numeric atom, formatted the way the runtime reads numbers back.
    pub fn number(value: f64) -> Self {
        Expr::Atom(format_number(value))
    }

    pub fn integer(value: i64) -> Self {
        Expr::Atom(value.to_string())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::String(text.into())
    }

    pub fn quote(inner: Expr) -> Self {
        Expr::Quote(Box::new(inner))
    }

    /// `'name`
    pub fn quoted_symbol(name: impl Into<String>) -> Self {
        Expr::quote(Expr::symbol(name))
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }

    /// `(head args...)`
    pub fn call(head: impl Into<String>, args: Vec<Expr>) -> Self {
        let mut items = Vec::with_capacity(args.len() + 1);
        items.push(Expr::symbol(head));
        items.extend(args);
        Expr::List(items)
    }

    pub fn if_(cond: Expr, then: Expr, otherwise: Option<Expr>) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: otherwise.map(Box::new),
        }
    }

    pub fn begin(exprs: Vec<Expr>) -> Self {
        Expr::Begin(exprs)
    }

    pub fn let_(bindings: Vec<(String, Expr)>, body: Expr) -> Self {
        Expr::Let {
            bindings,
            body: Box::new(body),
        }
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Expr::Comment {
            text: text.into(),
            style: CommentStyle::Line,
        }
    }

    pub fn block_comment(text: impl Into<String>) -> Self {
        Expr::Comment {
            text: text.into(),
            style: CommentStyle::Block,
        }
    }

    /// `#t` / `#f`
    pub fn boolean(value: bool) -> Self {
        Expr::atom(if value { "#t" } else { "#f" })
    }

    /// The runtime's null value.
    pub fn null() -> Self {
        Expr::symbol("*the-null-value*")
    }

    /// `'()`
    pub fn empty_list() -> Self {
        Expr::symbol("'()")
    }

    /// Render to a `String`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(text) | Expr::Symbol(text) => f.write_str(text),
            Expr::Quote(inner) => write!(f, "'{inner}"),
            Expr::String(text) => {
                f.write_char('"')?;
                f.write_str(&escape_string(text))?;
                f.write_char('"')
            }
            Expr::List(items) => write_sequence(f, None, items),
            Expr::If {
                cond,
                then,
                otherwise,
            } => match otherwise {
                Some(otherwise) => write!(f, "(if {cond} {then} {otherwise})"),
                None => write!(f, "(if {cond} {then})"),
            },
            Expr::Begin(exprs) => {
                if exprs.is_empty() {
                    f.write_str("(begin )")
                } else {
                    write_sequence(f, Some("begin"), exprs)
                }
            }
            Expr::Let { bindings, body } => {
                f.write_str("(let (")?;
                for (i, (name, value)) in bindings.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "({name} {value})")?;
                }
                write!(f, ") {body})")
            }
            Expr::Comment { text, style } => match style {
                CommentStyle::Line => {
                    for (i, line) in text.split('\n').enumerate() {
                        if i > 0 {
                            f.write_char('\n')?;
                        }
                        write!(f, ";;; {line}")?;
                    }
                    Ok(())
                }
                CommentStyle::Block => write!(f, "#|\n{text}\n|#"),
            },
        }
    }
}

fn write_sequence(f: &mut fmt::Formatter<'_>, head: Option<&str>, items: &[Expr]) -> fmt::Result {
    f.write_char('(')?;
    let mut first = true;
    if let Some(head) = head {
        f.write_str(head)?;
        first = false;
    }
    for item in items {
        if !first {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
        first = false;
    }
    f.write_char(')')
}

/// Escape a string body for a YAIL string literal.
///
/// Non-ASCII text is written as `\uXXXX` per UTF-16 code unit, so characters
/// outside the basic plane come out as surrogate pairs.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for unit in text.encode_utf16() {
        match unit {
            0x5c => out.push_str("\\\\"),
            0x22 => out.push_str("\\\""),
            0x0a => out.push_str("\\n"),
            0x0d => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            0x00..=0x7f => out.push(char::from(unit as u8)),
            _ => {
                // Infallible for String.
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// Format a number the way the runtime prints it: integral values without a
/// fractional part, everything else in shortest round-trip form. Magnitudes
/// of `1e21` and above, or below `1e-6`, use exponent form (`1e+21`,
/// `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

//! Terraform templates
//!
//! Templates are embedded at compile time and rendered with minijinja.
//! Besides plain field substitution they can use two filters:
//!
//! - `quote` renders a value as an escaped, double-quoted HCL string literal
//! - `deref` turns a nullable string into a plain string (null becomes "")

use crate::error::{Error, Result};
use minijinja::{Environment, Value};
use std::fmt::Write;
use std::sync::OnceLock;

/// Embedded templates, keyed by template id
const TEMPLATES: &[(&str, &str)] = &[
    ("monitor.tf", include_str!("monitor.tf.j2")),
    ("timeboard.tf", include_str!("timeboard.tf.j2")),
    ("screenboard.tf", include_str!("screenboard.tf.j2")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

/// Get the template environment (parses the embedded templates on first access)
pub fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        env.add_filter("quote", quote_filter);
        env.add_filter("deref", deref_filter);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Failed to parse embedded template {}: {}", name, e));
        }
        env
    })
}

/// Render the template `template_id` with `context` bound as its variables
pub fn render(template_id: &str, context: &serde_json::Value) -> Result<String> {
    let render_error = |source| Error::Render {
        template: template_id.to_string(),
        source,
    };
    let template = environment()
        .get_template(template_id)
        .map_err(render_error)?;
    let mut rendered = template.render(context).map_err(render_error)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Quote `value` as an HCL string literal.
///
/// Quotes, backslashes and control characters are escaped, and `${` / `%{`
/// are doubled so Terraform does not treat them as interpolation.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_filter(value: &Value) -> String {
    quote(&plain_string(value))
}

fn deref_filter(value: &Value) -> String {
    plain_string(value)
}

fn plain_string(value: &Value) -> String {
    if value.is_undefined() || value.is_none() {
        return String::new();
    }
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

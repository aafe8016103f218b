//! minijinja-backed template rendering.
//!
//! Output templates named `*.yaml.j2` / `*.yml.j2` are rendered with a YAML
//! escape mode: every interpolated value is emitted as a YAML scalar that
//! parses back to the same text.

use minijinja::value::ValueKind;
use minijinja::{AutoEscape, Environment, Error, Output, State, Value, escape_formatter};

use crate::domain::{AnswerMap, AnswersView, AppError};
use crate::ports::TemplateRenderer;

const YAML_ESCAPE: &str = "yaml";

pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(escape_mode_for);
        env.set_formatter(format_value);
        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render_inline(&self, template: &str, context: AnswersView<'_>) -> Result<String, AppError> {
        self.env.render_str(template, context).map_err(|e| AppError::TemplateRender {
            template: template.to_string(),
            details: e.to_string(),
        })
    }

    fn render_document(
        &self,
        name: &str,
        source: &str,
        answers: &AnswerMap,
    ) -> Result<String, AppError> {
        self.env.render_named_str(name, source, answers).map_err(|e| AppError::TemplateRender {
            template: name.to_string(),
            details: e.to_string(),
        })
    }
}

fn escape_mode_for(name: &str) -> AutoEscape {
    let stem = name.strip_suffix(".j2").unwrap_or(name);
    if stem.ends_with(".yaml") || stem.ends_with(".yml") {
        AutoEscape::Custom(YAML_ESCAPE)
    } else {
        AutoEscape::None
    }
}

fn format_value(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if matches!(state.auto_escape(), AutoEscape::Custom(YAML_ESCAPE)) && !value.is_safe() {
        out.write_str(&yaml_value(value))?;
        return Ok(());
    }
    escape_formatter(out, state, value)
}

fn yaml_value(value: &Value) -> String {
    match value.kind() {
        ValueKind::Undefined => String::new(),
        ValueKind::None => "null".to_string(),
        ValueKind::Bool | ValueKind::Number => value.to_string(),
        ValueKind::String => yaml_scalar(value.as_str().unwrap_or_default()),
        ValueKind::Seq => match value.try_iter() {
            Ok(items) => {
                format!("[{}]", items.map(|item| yaml_value(&item)).collect::<Vec<_>>().join(", "))
            }
            Err(_) => yaml_scalar(&value.to_string()),
        },
        _ => yaml_scalar(&value.to_string()),
    }
}

/// `text` as a YAML scalar: plain when that is unambiguous, double-quoted otherwise.
pub fn yaml_scalar(text: &str) -> String {
    if is_plain_safe(text) {
        return text.to_string();
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c if is_printable(c) => quoted.push(c),
            c if (c as u32) <= 0xFFFF => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push_str(&format!("\\U{:08X}", c as u32)),
        }
    }
    quoted.push('"');
    quoted
}

fn is_printable(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic() || (!ch.is_ascii() && ch.is_alphanumeric())
}

fn is_plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };

    !"-?:,[]{}#&*!|>'\"%@`".contains(first)
        && !text.starts_with("...")
        && text.trim() == text
        && !text.ends_with(':')
        && !text.contains(": ")
        && !text.contains(" #")
        && !text.contains([',', '[', ']', '{', '}'])
        && text.chars().all(is_printable)
        && !resolves_to_non_string(text)
}

/// Plain scalars a YAML reader would load as null, a boolean or a number.
fn resolves_to_non_string(text: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "~", "null", "true", "false", "yes", "no", "on", "off", "y", "n", ".inf", "+.inf",
        "-.inf", ".nan",
    ];
    if KEYWORDS.contains(&text.to_ascii_lowercase().as_str()) {
        return true;
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned.strip_prefix('.').unwrap_or(unsigned);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_hexdigit() || "xXoO_.:+-".contains(c))
}

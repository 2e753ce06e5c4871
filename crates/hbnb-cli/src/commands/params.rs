//! `key=value` parameter parsing for `create`
//!
//! Value syntax:
//! - `"quoted_string"`: underscores become spaces, `\"` becomes `"`
//! - integer: `42`, `-3`
//! - float: `37.77`
//!
//! Anything else is malformed and skipped.

/// A parsed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    /// Textual form handed to attribute assignment
    pub fn as_raw(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
        }
    }
}

/// Parse one `key=value` token; `None` when malformed
pub fn parse_param(token: &str) -> Option<(String, ParamValue)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), parse_value(value)?))
}

fn parse_value(value: &str) -> Option<ParamValue> {
    if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return parse_quoted(inner).map(ParamValue::Text);
    }
    if value.contains('.') {
        return value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(ParamValue::Float);
    }
    value.parse::<i64>().ok().map(ParamValue::Int)
}

/// Unescape a quoted body; a bare `"` inside makes it malformed
fn parse_quoted(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '"' => return None,
            '_' => out.push(' '),
            other => out.push(other),
        }
    }
    Some(out)
}

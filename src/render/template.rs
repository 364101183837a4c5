//! Minimal mustache-style templates
//!
//! Supports `{{name}}` (HTML-escaped), `{{#name}}...{{/name}}` rendered when
//! the value is truthy, and `{{^name}}...{{/name}}` rendered when it is not.
//! Sections of the same name cannot nest.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unclosed tag at byte {0}")]
    UnclosedTag(usize),

    #[error("section {0:?} is never closed")]
    UnclosedSection(String),

    #[error("unexpected closing tag {0:?}")]
    UnexpectedClose(String),

    #[error("template context must be an object")]
    NotAnObject,

    #[error("cannot build template context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Render `template` against `context`
pub fn render(template: &str, context: &Map<String, Value>) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    render_into(&mut out, template, 0, context)?;
    Ok(out)
}

fn render_into(
    out: &mut String,
    template: &str,
    offset: usize,
    context: &Map<String, Value>,
) -> Result<(), RenderError> {
    let mut rest = template;
    let mut position = offset;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or(RenderError::UnclosedTag(position + start))?;
        let tag = after[..end].trim();
        let consumed = start + 2 + end + 2;
        rest = &rest[consumed..];
        position += consumed;

        if let Some((name, inverted)) = section_name(tag) {
            let close = format!("{{{{/{}}}}}", name);
            let close_at = rest
                .find(&close)
                .ok_or_else(|| RenderError::UnclosedSection(name.to_string()))?;
            if is_truthy(context.get(name)) != inverted {
                render_into(out, &rest[..close_at], position, context)?;
            }
            rest = &rest[close_at + close.len()..];
            position += close_at + close.len();
        } else if let Some(name) = tag.strip_prefix('/') {
            return Err(RenderError::UnexpectedClose(name.trim().to_string()));
        } else {
            push_escaped(out, &value_text(context.get(tag)));
        }
    }

    out.push_str(rest);
    Ok(())
}

fn section_name(tag: &str) -> Option<(&str, bool)> {
    if let Some(name) = tag.strip_prefix('#') {
        Some((name.trim(), false))
    } else {
        tag.strip_prefix('^').map(|name| (name.trim(), true))
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(_)) => true,
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_variables() {
        let ctx = context(json!({"state": "CA", "count": 3, "flag": true}));
        assert_eq!(
            render("{{state}}/{{ count }}/{{flag}}/{{missing}}", &ctx).unwrap(),
            "CA/3/true/"
        );
    }

    #[test]
    fn test_sections() {
        let ctx = context(json!({"yes": true, "no": false, "text": "x"}));
        assert_eq!(
            render("[{{#yes}}a{{text}}{{/yes}}][{{#no}}b{{/no}}][{{^no}}c{{/no}}]", &ctx).unwrap(),
            "[ax][][c]"
        );
    }

    #[test]
    fn test_nested_sections() {
        let ctx = context(json!({"outer": true, "inner": "y"}));
        assert_eq!(
            render("{{#outer}}<{{#inner}}{{inner}}{{/inner}}>{{/outer}}", &ctx).unwrap(),
            "<y>"
        );
    }

    #[test]
    fn test_escaping() {
        let ctx = context(json!({"v": "<a href=\"x\">Tom & 'Jerry'</a>"}));
        assert_eq!(
            render("{{v}}", &ctx).unwrap(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_malformed_templates() {
        let ctx = Map::new();
        assert!(matches!(render("abc {{oops", &ctx), Err(RenderError::UnclosedTag(4))));
        assert!(matches!(
            render("{{#a}}never closed", &ctx),
            Err(RenderError::UnclosedSection(name)) if name == "a"
        ));
        assert!(matches!(
            render("{{/a}}", &ctx),
            Err(RenderError::UnexpectedClose(name)) if name == "a"
        ));
    }
}

//! HTML page rendering
//!
//! The page is compiled into the binary and filled from [`ViewFields`].

mod template;

pub use template::{render, RenderError};

use crate::quake::ViewFields;

const PAGE_TEMPLATE: &str = include_str!("../../templates/result.html");

/// Render the search page for a set of view fields
pub fn page(fields: &ViewFields) -> Result<String, RenderError> {
    let context = match serde_json::to_value(fields)? {
        serde_json::Value::Object(map) => map,
        _ => return Err(RenderError::NotAnObject),
    };
    render(PAGE_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_has_form_only() {
        let html = page(&ViewFields::default()).unwrap();
        assert!(html.contains("<form"));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"missing\""));
    }

    #[test]
    fn test_result_page() {
        let fields = ViewFields {
            state: "CA".into(),
            year: "2023".into(),
            month: "4".into(),
            show_result: true,
            quake_count: "12".into(),
            max_mag: "4.30".into(),
            quake_occurred: "Yes".into(),
            pred_prob_percent: "87.65 %".into(),
            ..ViewFields::default()
        };
        let html = page(&fields).unwrap();
        assert!(html.contains("class=\"result\""));
        assert!(html.contains("87.65 %"));
        assert!(html.contains("value=\"CA\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_messages_are_escaped() {
        let fields = ViewFields {
            state: "<B>".into(),
            show_error: true,
            error_message: "<B> is not a valid 2-letter state code".into(),
            ..ViewFields::default()
        };
        let html = page(&fields).unwrap();
        assert!(html.contains("&lt;B&gt; is not a valid"));
        assert!(!html.contains("<B>"));
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::sanitize::{plain_text, sanitize_html};

const ELLIPSIS: &str = "...";

/// Parse an API timestamp. Accepts RFC 3339 as well as the naive
/// `2024-03-01T10:00:00.000` and `2024-03-01 10:00:00` forms.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short numeric date, e.g. `3/1/2024`. Empty when the timestamp is missing
/// or unreadable.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// `Updated: 3/1/2024`
pub fn updated_label(value: Option<&str>) -> String {
    format!("Updated: {}", format_date(value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichText {
    /// Rendered as a text node.
    Plain(String),
    /// Already sanitized markup, safe to assign to `innerHTML`.
    Html(String),
}

/// A novel description that collapses to a fixed number of visible characters.
/// Markup is not counted, and the collapsed form is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synopsis {
    full: String,
    truncated: Option<String>,
}

impl Synopsis {
    pub fn new(text: &str, limit: usize) -> Self {
        let visible = plain_text(text);
        let truncated = visible
            .char_indices()
            .nth(limit)
            .map(|(offset, _)| format!("{}{}", &visible[..offset], ELLIPSIS));

        Self {
            full: text.to_string(),
            truncated,
        }
    }

    /// Whether a show more/less toggle applies.
    pub fn is_truncated(&self) -> bool {
        self.truncated.is_some()
    }

    pub fn render(&self, expanded: bool) -> RichText {
        match &self.truncated {
            Some(truncated) if !expanded => RichText::Plain(truncated.clone()),
            _ => RichText::Html(sanitize_html(&self.full)),
        }
    }
}

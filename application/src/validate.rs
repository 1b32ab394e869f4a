use serde::Serialize;

/// A single form-field validation failure, echoed back on the re-rendered form.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Trims the input and escapes HTML-significant characters.
pub fn sanitize(input: &str) -> String {
    escape(input.trim())
}

/// Escapes `&`, `<`, `>`, `"`, `'` and `/` as HTML entities.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// `Some(error)` when `value` is empty, `None` otherwise.
pub fn required(field: &'static str, value: &str, message: &'static str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::new(field, message))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::{required, sanitize};

    #[test]
    fn sanitize_trims_and_escapes() {
        assert_eq!(sanitize("  Sci-Fi  "), "Sci-Fi");
        assert_eq!(sanitize("Rock & Roll"), "Rock &amp; Roll");
        assert_eq!(sanitize("<script>"), "&lt;script&gt;");
        assert_eq!(sanitize("  \t "), "");
    }

    #[test]
    fn required_rejects_empty_only() {
        assert!(required("name", "", "Genre name required").is_some());
        assert!(required("name", "Fantasy", "Genre name required").is_none());
    }
}

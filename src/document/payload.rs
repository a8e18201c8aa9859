//! JSON payload formatting for API contracts.

/// Pretty-prints `text` with two-space indentation when it parses as JSON.
///
/// Anything that is not valid JSON comes back unchanged, so half-typed
/// payloads are never lost.
#[must_use]
pub fn format_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_json;

    #[test]
    fn pretty_prints_valid_json() {
        let formatted = format_json(r#"{"email":"string","password":"string"}"#);
        assert_eq!(formatted, "{\n  \"email\": \"string\",\n  \"password\": \"string\"\n}");
    }

    #[test]
    fn leaves_invalid_json_untouched() {
        assert_eq!(format_json("{ \"email\": "), "{ \"email\": ");
        assert_eq!(format_json("plain text"), "plain text");
    }
}

//! Post-parse validation helpers.

use miette::SourceSpan;

/// Check that a table name is a plain SQL identifier.
///
/// Returns a reason string when the name is rejected.
pub fn validate_table_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("table names cannot be empty".to_string());
    }

    let mut chars = name.chars();
    let first = chars.next().expect("non-empty");
    if !first.is_ascii_alphabetic() && first != '_' {
        return Some(format!("'{}' starts with '{}'", name, first));
    }

    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Some(format!("'{}' contains '{}'", name, bad));
    }

    None
}

/// Locate the first quoted occurrence of `name` in the manifest source so
/// diagnostics can point at it.
pub fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let needle = format!("{}{}{}", quote, name, quote);
        if let Some(offset) = src.find(&needle) {
            return Some(SourceSpan::from((offset + 1, name.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_table_name_accepts_identifiers() {
        assert!(validate_table_name("users").is_none());
        assert!(validate_table_name("rv_users").is_none());
        assert!(validate_table_name("_staging2").is_none());
    }

    #[test]
    fn test_validate_table_name_rejects_bad_input() {
        assert!(validate_table_name("").is_some());
        assert!(validate_table_name("2fast").is_some());
        assert!(validate_table_name("user-accounts").is_some());
        assert!(validate_table_name("users; drop table").is_some());
    }

    #[test]
    fn test_find_name_span() {
        let src = r#"tables = ["rv_users"]"#;
        let span = find_name_span(src, "rv_users").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 8);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("tables = []", "rv_users").is_none());
    }
}

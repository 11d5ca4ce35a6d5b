//! Identifier transforms applied to database names.

/// Convert a database identifier to PascalCase (e.g., "user_name" -> "UserName")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a database identifier to camelCase (e.g., "user_name" -> "userName")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Strip a single leading prefix segment from a table name
/// (e.g., "rv_users" -> "users").
///
/// Removes the first run of non-underscore characters together with the
/// underscore that follows it. Only one segment is stripped, so multi-part
/// prefixes ("app_rv_users") lose their first segment only. Generated class
/// names depend on this behavior; do not widen it.
pub fn strip_table_prefix(name: &str) -> &str {
    match name.split_once('_') {
        Some((prefix, rest)) if !prefix.is_empty() => rest,
        _ => name,
    }
}

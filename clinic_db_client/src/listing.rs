/// Resolves a client-requested ordering (`name` or `-created_at`) against a
/// whitelist of (public field, SQL column) pairs. Unknown fields fall back
/// to the entity default, so a bad `ordering` param can never reach the SQL.
pub(crate) fn resolve_ordering(
    requested: Option<&str>,
    allowed: &[(&str, &str)],
    default: &'static str,
) -> String {
    let Some(requested) = requested else {
        return default.to_string();
    };

    let (field, direction) = match requested.strip_prefix('-') {
        Some(field) => (field, "DESC"),
        None => (requested, "ASC"),
    };

    match allowed.iter().find(|(name, _)| *name == field) {
        Some((_, column)) => format!("{column} {direction}"),
        None => default.to_string(),
    }
}

/// Builds an ILIKE pattern matching rows that contain `term`, escaping the
/// LIKE metacharacters in the user-supplied text.
pub(crate) fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

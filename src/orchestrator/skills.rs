/// Splits a comma-separated skill string, trimming each entry and dropping
/// empty ones. Order is preserved.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

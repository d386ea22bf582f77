/// Renders ids as `[1 2 3]`
pub fn format_ids(ids: &[u32]) -> String {
    let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", joined.join(" "))
}

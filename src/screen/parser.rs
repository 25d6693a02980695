use crate::domain::SessionEntry;

pub(super) fn split_listing(output: &str) -> Vec<String> {
    output
        .trim_matches('\n')
        .split('\n')
        .map(ToString::to_string)
        .collect()
}

/// `screen -ls` wraps the session lines in a header and a socket summary;
/// only the middle is selectable. Fewer than two raw lines means screen
/// reported no sessions at all.
pub(super) fn selectable_sessions(lines: &[String]) -> Result<Vec<SessionEntry>, String> {
    if lines.len() < 2 {
        return Err("no screen sessions found".to_string());
    }
    Ok(lines[1..lines.len() - 1]
        .iter()
        .map(SessionEntry::new)
        .collect())
}

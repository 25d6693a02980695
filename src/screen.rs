use std::path::Path;

mod parser;
mod system;

pub use system::SystemScreenAdapter;

use crate::domain::SessionEntry;

/// Fixed path each hardcopy is staged at before display. Overwritten on
/// every capture; concurrent invocations of the tool race on it.
pub const SCRATCH_PATH: &str = "/tmp/screen_temp_file";

pub trait ScreenAdapter {
    /// Raw `screen -ls` output lines, header and summary included.
    fn list_sessions(&self) -> Result<Vec<String>, String>;
    /// Dump the named session's visible buffer to `target`.
    fn hardcopy(&self, session: &str, target: &Path) -> Result<(), String>;
}

pub fn selectable_sessions(lines: &[String]) -> Result<Vec<SessionEntry>, String> {
    parser::selectable_sessions(lines)
}

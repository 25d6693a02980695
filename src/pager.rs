use std::path::Path;
use std::process::{Child, Command};

use tracing::{debug, warn};

pub trait Pager {
    /// Display the file and block until the viewer exits.
    fn view(&self, path: &Path) -> Result<(), String>;
}

/// Runs the program named by `PAGER` on the file, or falls back to `less`
/// with no line wrapping, search highlighting, raw control bytes, and the
/// cursor jumped to end-of-file.
#[derive(Clone, Debug, Default)]
pub struct SystemPager;

impl SystemPager {
    pub fn new() -> Self {
        Self
    }

    fn viewer_command(path: &Path) -> Command {
        match std::env::var("PAGER") {
            Ok(pager) if !pager.trim().is_empty() => {
                debug!("using PAGER override '{pager}'");
                let mut command = Command::new(pager);
                command.arg(path);
                command
            }
            _ => {
                let mut command = Command::new("less");
                command.args(["-X", "-N", "-R", "-S", "+G"]).arg(path);
                command
            }
        }
    }

    /// Spawn the viewer attached to the current console without waiting.
    pub fn spawn_viewer(path: &Path) -> Result<Child, String> {
        Self::viewer_command(path)
            .spawn()
            .map_err(|err| format!("failed to start pager for {:?}: {err}", path))
    }
}

impl Pager for SystemPager {
    fn view(&self, path: &Path) -> Result<(), String> {
        let mut child = Self::spawn_viewer(path)?;
        match child.wait() {
            Ok(status) if !status.success() => {
                warn!("pager exited with {status}");
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => Err(format!("failed waiting for pager: {err}")),
        }
    }
}

use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::{parser::split_listing, ScreenAdapter};

/// Adapter over the real `screen` binary.
#[derive(Clone, Debug, Default)]
pub struct SystemScreenAdapter;

impl SystemScreenAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run_screen(&self, args: &[String]) -> Result<String, String> {
        debug!("running screen {:?}", args);
        let output = Command::new("screen")
            .args(args)
            .output()
            .map_err(|err| format!("failed to run screen {:?}: {err}", args))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("screen {:?} failed: {}", args, stderr.trim()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl ScreenAdapter for SystemScreenAdapter {
    fn list_sessions(&self) -> Result<Vec<String>, String> {
        let args = vec!["-ls".to_string()];
        let stdout = self.run_screen(&args)?;
        Ok(split_listing(&stdout))
    }

    fn hardcopy(&self, session: &str, target: &Path) -> Result<(), String> {
        let args = vec![
            "-S".to_string(),
            session.to_string(),
            "-p".to_string(),
            "0".to_string(),
            "-X".to_string(),
            "hardcopy".to_string(),
            target.display().to_string(),
        ];
        let _ = self.run_screen(&args)?;
        Ok(())
    }
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic enough")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{suffix}"));
    fs::create_dir_all(&dir).expect("temp directory should be creatable");
    dir
}

pub fn prepend_to_path(dir: &Path) -> String {
    let existing = std::env::var("PATH").unwrap_or_default();
    format!("{}:{existing}", dir.display())
}

/// Fake `screen` binary: `-ls` prints the canned listing (or fails with
/// `list_exit`); any other invocation is treated as a hardcopy request and
/// writes a stub snapshot to its last argument.
pub fn write_fake_screen_bin(dir: &Path, listing: &str, list_exit: i32) {
    let listing_path = dir.join("listing.txt");
    fs::write(&listing_path, listing).expect("listing fixture should write");

    let script_path = dir.join("screen");
    let script = format!(
        r#"#!/usr/bin/env bash
set -euo pipefail

if [[ "${{1:-}}" == "-ls" ]]; then
  if [[ {list_exit} -ne 0 ]]; then
    echo "fake screen listing failure" >&2
    exit {list_exit}
  fi
  cat "{listing}"
  exit 0
fi

# screen -S <session> -p 0 -X hardcopy <target>
target="${{!#}}"
printf 'snapshot of %s\n' "${{2:-}}" > "$target"
"#,
        listing = listing_path.display(),
    );
    fs::write(&script_path, script).expect("screen stub script should write");
    mark_executable(&script_path);
}

/// Stub pager that swallows the file and exits cleanly, so previews never
/// block the test on a real `less`.
pub fn write_fake_pager_bin(dir: &Path) -> PathBuf {
    let script_path = dir.join("pager");
    let script = "#!/usr/bin/env bash\ncat \"${1:-/dev/null}\" > /dev/null 2>&1 || true\nexit 0\n";
    fs::write(&script_path, script).expect("pager stub script should write");
    mark_executable(&script_path);
    script_path
}

fn mark_executable(path: &Path) {
    let chmod = Command::new("chmod")
        .args(["+x", path.to_string_lossy().as_ref()])
        .status()
        .expect("chmod should execute for stub");
    assert!(chmod.success(), "stub chmod should succeed");
}

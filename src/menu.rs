use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::domain::SessionEntry;
use crate::pager::Pager;
use crate::screen::{selectable_sessions, ScreenAdapter, SCRATCH_PATH};

/// Terminal branches of one pass through the menu. `Again` tells the
/// driver to re-list and re-render; the other two end the process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MenuOutcome {
    /// Print the reattach command for this session identifier and exit 0.
    Reattach(String),
    /// The user chose the exit token; exit 1.
    Exit,
    Again,
}

/// One pass of the list/choose/preview/reattach loop. Collaborators come
/// in as trait objects so the state machine runs against fakes in tests.
pub fn run_menu(
    screen: &dyn ScreenAdapter,
    pager: &dyn Pager,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    auto: bool,
) -> Result<MenuOutcome, String> {
    let lines = screen.list_sessions()?;
    let sessions = selectable_sessions(&lines)?;

    if auto {
        if let Some(entry) = sessions.iter().find(|entry| entry.is_detached()) {
            info!("auto-selecting detached session {}", entry.identifier());
            return Ok(MenuOutcome::Reattach(entry.identifier().to_string()));
        }
    }

    render_menu(output, &sessions)?;

    let choice = read_console_line(input)?;
    info!("read menu choice '{choice}'");
    if choice == "x" {
        info!("exit option selected");
        return Ok(MenuOutcome::Exit);
    }

    let index: usize = choice
        .parse()
        .map_err(|_| format!("invalid menu choice '{choice}': expected a session number or x"))?;
    let entry = sessions
        .get(index)
        .ok_or_else(|| format!("menu choice {index} is out of range"))?;
    info!("session selected: {}", entry.identifier());

    preview(screen, pager, entry)?;

    writeln!(output, "\nDo you want to open this screen? (y/n)")
        .map_err(|err| format!("failed writing prompt: {err}"))?;
    let answer = read_console_line(input)?;
    if answer == "y" {
        Ok(MenuOutcome::Reattach(entry.identifier().to_string()))
    } else {
        Ok(MenuOutcome::Again)
    }
}

fn render_menu(output: &mut dyn Write, sessions: &[SessionEntry]) -> Result<(), String> {
    let mut render = || -> std::io::Result<()> {
        writeln!(output, "Available Screens:\n")?;
        for (index, entry) in sessions.iter().enumerate() {
            writeln!(output, "{index} {}", entry.raw())?;
        }
        writeln!(output, "X\tExit")?;
        write!(output, "Choose a screen to open\n> ")?;
        output.flush()
    };
    render().map_err(|err| format!("failed writing menu: {err}"))
}

fn preview(
    screen: &dyn ScreenAdapter,
    pager: &dyn Pager,
    entry: &SessionEntry,
) -> Result<(), String> {
    let scratch = Path::new(SCRATCH_PATH);
    screen.hardcopy(entry.identifier(), scratch)?;
    pager.view(scratch)?;
    if let Err(err) = fs::remove_file(scratch) {
        warn!("failed to remove scratch file {SCRATCH_PATH}: {err}");
    }
    Ok(())
}

/// Read one line, lowercase it, and strip line terminators. EOF yields an
/// empty string, which downstream parsing rejects.
fn read_console_line(input: &mut dyn BufRead) -> Result<String, String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|err| format!("failed reading console input: {err}"))?;
    Ok(line.to_lowercase().replace(['\n', '\r'], ""))
}

use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use tracing::{error, info};

use crate::menu::{run_menu, MenuOutcome};
use crate::pager::SystemPager;
use crate::screen::SystemScreenAdapter;

#[derive(Debug, Parser)]
#[command(name = "screenpick", about = "Pick, preview, and reattach GNU screen sessions")]
struct Cli {
    /// Show verbose debug information (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Auto connect if there are detached screens
    #[arg(short = 'a', long = "auto")]
    auto: bool,
}

pub fn run() -> i32 {
    match Cli::try_parse() {
        Ok(cli) => run_command(cli),
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            code
        }
    }
}

fn run_command(cli: Cli) -> i32 {
    init_logging(cli.verbose);
    info!("verbosity set to {}", cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    run_picker(cli.auto, &mut input, &mut output)
}

fn run_picker(auto: bool, input: &mut dyn BufRead, output: &mut dyn Write) -> i32 {
    let screen = SystemScreenAdapter::new();
    let pager = SystemPager::new();
    loop {
        match run_menu(&screen, &pager, input, output, auto) {
            Ok(MenuOutcome::Reattach(session)) => {
                let _ = writeln!(output, "screen -x {session}");
                let _ = output.flush();
                return 0;
            }
            Ok(MenuOutcome::Exit) => return 1,
            Ok(MenuOutcome::Again) => {}
            Err(err) => {
                error!("{err}");
                return 1;
            }
        }
    }
}

/// Build the one process-wide subscriber from the resolved verbosity.
/// `RUST_LOG` wins when set so the filter stays overridable in the field.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("screenpick={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

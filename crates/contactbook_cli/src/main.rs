//! Interactive contact book entry point.
//!
//! # Responsibility
//! - Resolve the backing-file path and bootstrap logging.
//! - Hand terminal I/O and the repository to the menu shell.
//! - Keep exit codes at the process boundary.

use contactbook_core::{ContactRepository, CsvFileStore};
use std::path::PathBuf;
use std::process::ExitCode;

mod shell;

const DEFAULT_DATA_FILE: &str = "contacts.csv";
const LOG_SUBDIR: &str = "logs";

fn main() -> ExitCode {
    // One optional positional argument externalizes the backing-file path;
    // there are no flags.
    let data_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);

    init_logging_best_effort();
    log::info!(
        "event=cli_start module=cli status=ok version={} data_path={}",
        contactbook_core::core_version(),
        data_path.display()
    );

    let store = CsvFileStore::new(&data_path);
    let mut repo = match ContactRepository::open(store) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!(
                "failed to open contact store at `{}`: {err}",
                data_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match shell::run(&mut repo, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Starts file logging next to the working directory.
///
/// Logging must never take the tool down: failures are reported on stderr
/// and otherwise ignored.
fn init_logging_best_effort() {
    let Ok(current_dir) = std::env::current_dir() else {
        return;
    };
    let log_dir = current_dir.join(LOG_SUBDIR);
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = contactbook_core::init_logging(contactbook_core::default_log_level(), log_dir)
    {
        eprintln!("logging disabled: {err}");
    }
}

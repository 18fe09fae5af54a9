//! Terminal entry point for the roster records manager.
//!
//! # Responsibility
//! - Wire logging, the JSON store, and the service into a menu session.
//! - Surface load warnings before the menu starts; never abort on them.

use roster_core::{default_log_level, init_logging, JsonStore, RosterService};
use std::io;
use std::path::PathBuf;

mod menu;

fn main() -> io::Result<()> {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Ok(cwd) = std::env::current_dir() {
        let log_dir = cwd.join(&data_dir).join("logs");
        if let Some(path) = log_dir.to_str() {
            if let Err(err) = init_logging(default_log_level(), path) {
                eprintln!("Warning: logging disabled: {err}");
            }
        }
    }

    let store = JsonStore::new(&data_dir);
    let (service, report) = RosterService::bootstrap(store);
    if let Some(err) = &report.employees_error {
        eprintln!("Warning: employees could not be loaded ({err}); starting with an empty list.");
    }
    if let Some(err) = &report.departments_error {
        eprintln!("Warning: departments could not be loaded ({err}); starting with an empty list.");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::MenuSession::new(stdin.lock(), stdout.lock(), service).run()
}

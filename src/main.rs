//! `recordbook` (rb) - Local record book
//!
//! Short text records with a nickname, severity and status, kept in one JSON
//! file. No daemon, no network.

use recordbook::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

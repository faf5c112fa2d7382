//! Grocery POS CLI
//!
//! Runs one register session on the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to trace cart and payment activity on stderr

use grocery_pos::{run_session, Catalog, Result, Terminal};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut term = Terminal::new(stdin.lock(), stdout.lock());

    run_session(&Catalog::grocery(), &mut term)?;
    Ok(())
}

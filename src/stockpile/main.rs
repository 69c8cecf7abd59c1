//! # Stockpile CLI
//!
//! The binary is intentionally thin: the interactive client lives in `src/stockpile/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! Everything the session does to products goes through
//! [`stockpile::api::InventoryApi`]. The CLI layer owns the terminal: it reads
//! flags, resolves the data directory, prompts for input, and renders results.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

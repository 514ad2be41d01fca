//! # servz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/servz/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                  │
//! │  - logging, context wiring, dispatch (commands.rs)   │
//! │  - terminal and JSON rendering (render.rs)           │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  API Layer (servzapp::api)                           │
//! │  - parses KEY=VALUE assignments and filters          │
//! │  - dispatches to command modules                     │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  Command Layer (servzapp::commands)                  │
//! │  - business logic, no terminal I/O                   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. This crate owns argument parsing,
//! log setup, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

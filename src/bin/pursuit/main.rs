//! Terminal front end.
//!
//! Reads one command per line from stdin and prints the board of the active
//! dimension after each one.
//!
//! Environment:
//! - `PURSUIT_LANG`   language tag for built-in text (`en`, `zh-CN`, ...)
//! - `PURSUIT_LEVELS` path to a JSON level file replacing the built-in levels
//! - `RUST_LOG`       tracing filter, `warn` by default

#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::main();
}

// The browser entry point is `start_game` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}

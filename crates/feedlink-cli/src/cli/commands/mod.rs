//! Subcommand implementations.

mod check;
mod completions;
mod man;
mod resolve;

pub use check::run_check;
pub use completions::run_completions;
pub use man::run_man;
pub use resolve::run_resolve;

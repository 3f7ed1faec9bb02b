//! Command handler modules for the staybot CLI.
//!
//! Each command lives in its own file and follows the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

pub mod bench;
pub mod cfg;
pub mod decide;
pub mod demo;
pub mod eval;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use decide::{DecideOptions, handle_decide_command};
pub use demo::handle_demo_command;
pub use eval::handle_eval_command;

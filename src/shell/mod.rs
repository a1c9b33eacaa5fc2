//! Interactive shell
//!
//! Line-oriented commands over a folder registry.

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::handle_command;
pub use parser::{Command, CommandResult, CommandStatus, parse_command};
pub use session::run_session;

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod info;
pub mod session;
pub mod summary;

pub use info::{
    handle_categories_command, handle_config_command, handle_history_command,
    handle_init_command,
};
pub use session::{Session, SessionCommand};
pub use summary::{handle_summary_command, SummaryArgs};

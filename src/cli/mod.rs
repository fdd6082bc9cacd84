//! CLI command handling module
//!
//! Handles argument parsing and the command table.

mod commands;
mod logging;
mod version;

pub use commands::{
    Cli, Command, DownloaderArgs, LookupArgs, emit, handle_downloader, handle_lookup, lookup,
    write_payload,
};
pub use logging::init_logging;
pub use version::display_version;

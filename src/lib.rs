//! Look up a Vagrant machine's id from its name.
//!
//! Vagrant only exposes its machine index through the human-oriented
//! `vagrant global-status` report, so this crate runs that command and picks
//! the report apart.  It's about as robust as that sounds: any change to the
//! report's layout is treated as a hard error rather than guessed around.
//!
//! # Examples
//!
//! Print the id of the machine named _web_.
//!
//! ```no_run
//! use vname::ToolConfig;
//!
//! let cfg = ToolConfig::default();
//! let entry = vname::globalstatus::get_entry("web", &cfg).unwrap();
//! print!("{}", entry.id());
//! ```

mod strutils;
mod utils;

pub mod config;
pub mod entry;
pub mod err;
pub mod globalstatus;
pub mod platform;

pub use config::ToolConfig;
pub use entry::Entry;
pub use err::Error;


/// Check whether the configured tool can be found.
pub fn have_tool(cfg: &ToolConfig) -> bool {
  platform::locate(cfg).is_ok()
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

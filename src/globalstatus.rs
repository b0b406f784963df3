//! Fetch and search the tool's global status report.
//!
//! The report is expected to look like this:
//!
//! ```text
//! id       name    provider   state    directory
//! ----------------------------------------------------------
//! abc123   web     virtualbox running  /home/me/web
//! def456   db      virtualbox poweroff /home/me/db
//!
//! The above shows information about all known Vagrant environments
//! ```
//!
//! The name column has no fixed width, so the offset of the column that
//! follows it (the _marker_, `provider` by default) in the header is used to
//! cut every data row before splitting it into an id and a name.

use std::process::Command;

use regex::Regex;
use tracing::{debug, trace};

use crate::config::ToolConfig;
use crate::entry::Entry;
use crate::err::Error;
use crate::platform;
use crate::strutils::{buf_to_string, is_blank, truncate_at};
use crate::utils;


/// An id made of word characters, whitespace, then a non-empty name.
pub const ROW_PATTERN: &str = r"^(\w+)\s+(\S.*)$";


/// Run the tool's global status command and return its standard output.
pub fn get_output(cfg: &ToolConfig) -> Result<String, Error> {
  let exe = platform::locate(cfg)?;

  let mut cmd = Command::new(exe);
  cmd.arg(&cfg.subcommand);

  let (stdout, stderr) = utils::exec(cmd)?;
  if !stderr.is_empty() {
    debug!("{} stderr: {}", cfg.tool, String::from_utf8_lossy(&stderr));
  }

  buf_to_string(stdout)
}


/// Find the entry named `lookup` in a global status `report`.
///
/// The first line is the header and must contain `cfg.marker`; the line
/// after it is skipped.  Data rows are scanned until the first blank line and
/// the first row whose (trimmed) name equals `lookup` is returned.  Any row
/// that can't be split into an id and a name aborts the scan.
///
/// ```
/// use vname::{globalstatus, ToolConfig};
///
/// let report = "\
/// id       name    provider   state
/// -------------------------------------
/// abc123   web     virtualbox running
/// def456   db      virtualbox poweroff
///
/// total entries: 2
/// ";
///
/// let cfg = ToolConfig::default();
/// let entry = globalstatus::parse(report, "db", &cfg).unwrap();
/// assert_eq!(entry.id(), "def456");
///
/// let err = globalstatus::parse(report, "cache", &cfg).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn parse(
  report: &str,
  lookup: &str,
  cfg: &ToolConfig
) -> Result<Entry, Error> {
  let re = Regex::new(ROW_PATTERN)?;

  let mut lines = report.lines();

  let header = lines.next().filter(|line| !is_blank(line));
  let cutoff = match header.and_then(|h| h.find(cfg.marker.as_str())) {
    Some(col) => col,
    None => {
      return Err(Error::MalformedHeader {
        marker: cfg.marker.clone(),
        command: cfg.command_line()
      });
    }
  };
  debug!("'{}' column starts at offset {}", cfg.marker, cutoff);

  // Separator (or spacer) between the header and the rows.
  lines.next();

  for line in lines {
    if is_blank(line) {
      break;
    }

    let row = truncate_at(line, cutoff);
    let cap = match re.captures(row) {
      Some(cap) => cap,
      None => {
        return Err(Error::MalformedRow {
          line: row.to_string(),
          pattern: ROW_PATTERN.to_string()
        });
      }
    };

    let entry = Entry::new(&cap[1], &cap[2]);
    trace!("row: id={} name={}", entry.id(), entry.name());
    if entry.name() == lookup {
      return Ok(entry);
    }
  }

  Err(Error::NotFound(lookup.to_string()))
}


/// Fetch the global status report and find the entry named `name` in it.
pub fn get_entry(name: &str, cfg: &ToolConfig) -> Result<Entry, Error> {
  let out = get_output(cfg)?;
  parse(&out, name, cfg)
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

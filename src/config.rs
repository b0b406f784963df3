//! Which tool to run and how to read its report.

/// The executable that produces the status report.
pub const DEFAULT_TOOL: &str = "vagrant";

/// The subcommand that makes the tool print its global status report.
pub const DEFAULT_SUBCOMMAND: &str = "global-status";

/// The header column that follows the name column.
pub const DEFAULT_MARKER: &str = "provider";


/// Fixed settings for fetching and reading a global status report.
///
/// ```
/// use vname::ToolConfig;
///
/// let cfg = ToolConfig::default().with_tool("/opt/vagrant/bin/vagrant");
/// assert_eq!(cfg.command_line(), "/opt/vagrant/bin/vagrant global-status");
/// assert_eq!(cfg.marker, "provider");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolConfig {
  /// Name or path of the executable.
  pub tool: String,

  pub subcommand: String,

  /// Header substring whose offset becomes the cutoff column.
  pub marker: String
}

impl Default for ToolConfig {
  fn default() -> Self {
    ToolConfig {
      tool: DEFAULT_TOOL.to_string(),
      subcommand: DEFAULT_SUBCOMMAND.to_string(),
      marker: DEFAULT_MARKER.to_string()
    }
  }
}

impl ToolConfig {
  pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
    self.tool = tool.into();
    self
  }

  pub fn with_marker<S: Into<String>>(mut self, marker: S) -> Self {
    self.marker = marker.into();
    self
  }

  /// The command as a user would type it; used in diagnostics.
  pub fn command_line(&self) -> String {
    format!("{} {}", self.tool, self.subcommand)
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

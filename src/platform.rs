use std::path::PathBuf;

use tracing::debug;

use crate::config::ToolConfig;
use crate::err::Error;


/// Resolve the configured tool to an executable path.
///
/// A bare name is looked up in `PATH` (honoring `PATHEXT` on Windows); a
/// name containing a path separator is checked as given.
pub fn locate(cfg: &ToolConfig) -> Result<PathBuf, Error> {
  match which::which(&cfg.tool) {
    Ok(path) => {
      debug!("using {} at {}", cfg.tool, path.display());
      Ok(path)
    }
    Err(e) => {
      debug!("unable to resolve {}: {}", cfg.tool, e);
      Err(Error::ToolNotFound(cfg.tool.clone()))
    }
  }
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

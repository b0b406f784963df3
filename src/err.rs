use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
  IO(String),
  ToolNotFound(String),
  FailedToExecute(String),
  CommandFailed(Option<i32>, String),
  BadFormat(String),
  MalformedHeader { marker: String, command: String },
  MalformedRow { line: String, pattern: String },
  NotFound(String)
}

impl Error {
  /// Returns `true` if the error was caused by the report not listing the
  /// requested machine, as opposed to the report or the tool being broken.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
  fn from(err: io::Error) -> Self {
    Error::IO(err.to_string())
  }
}

impl From<regex::Error> for Error {
  fn from(err: regex::Error) -> Self {
    Error::BadFormat(err.to_string())
  }
}

impl From<std::string::FromUtf8Error> for Error {
  fn from(err: std::string::FromUtf8Error) -> Self {
    Error::BadFormat(err.to_string())
  }
}


impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &*self {
      Error::IO(s) => write!(f, "I/O error; {}", s),
      Error::ToolNotFound(tool) => {
        write!(f, "cannot find '{}' installed on this system", tool)
      }
      Error::FailedToExecute(s) => write!(f, "Unable to execute {}", s),
      Error::CommandFailed(code, s) => match code {
        Some(code) => write!(f, "Command failed; exit status={}; {}", code, s),
        None => write!(f, "Command failed; {}", s)
      },
      Error::BadFormat(s) => write!(f, "Bad format error; {}", s),
      Error::MalformedHeader { marker, command } => write!(
        f,
        "can't find column '{}' in header of output of '{}'",
        marker, command
      ),
      Error::MalformedRow { line, pattern } => {
        write!(f, "no matches in '{}' for pattern '{}'", line, pattern)
      }
      Error::NotFound(name) => {
        write!(f, "name '{}' does not match any box name", name)
      }
    }
  }
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

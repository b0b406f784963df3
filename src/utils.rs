use std::process::Command;

use tracing::debug;

use crate::err::Error;


/// Run `cmd` to completion and return its stdout and stderr.
///
/// A command that can't be spawned yields `FailedToExecute`, one that exits
/// unsuccessfully yields `CommandFailed` carrying its exit code and stderr.
pub(crate) fn exec(mut cmd: Command) -> Result<(Vec<u8>, Vec<u8>), Error> {
  debug!("executing {:?}", cmd);

  let out = match cmd.output() {
    Ok(out) => out,
    Err(e) => {
      return Err(Error::FailedToExecute(format!("{:?}; {}", cmd, e)));
    }
  };

  if out.status.success() {
    Ok((out.stdout, out.stderr))
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    Err(Error::CommandFailed(
      out.status.code(),
      format!("{:?}; {}", cmd, stderr.trim())
    ))
  }
}


#[cfg(all(test, unix))]
mod tests {
  use super::*;

  #[test]
  fn captures_stdout() {
    let mut cmd = Command::new("sh");
    cmd.args(&["-c", "echo hello"]);
    let (stdout, _) = exec(cmd).unwrap();
    assert_eq!(stdout, b"hello\n");
  }

  #[test]
  fn nonzero_exit_is_command_failed() {
    let mut cmd = Command::new("sh");
    cmd.args(&["-c", "echo nope >&2; exit 3"]);
    match exec(cmd) {
      Err(Error::CommandFailed(Some(3), msg)) => assert!(msg.ends_with("nope")),
      other => panic!("unexpected result: {:?}", other)
    }
  }

  #[test]
  fn unspawnable_is_failed_to_execute() {
    let cmd = Command::new("/nonexistent/vname-test-binary");
    match exec(cmd) {
      Err(Error::FailedToExecute(_)) => {}
      other => panic!("unexpected result: {:?}", other)
    }
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :

//! Thin wrappers around external process invocation.
//!
//! Every build step shells out to some external tool (git, make, odin, the
//! map compilers, the game itself). Invocations are synchronous and the
//! exit status is checked before the pipeline continues.

use std::process::Command;

use tracing::debug;

use crate::Result;
use crate::error::Error;

/// Run a command to completion with inherited stdio, failing on non-zero
/// exit.
pub fn run(command: &mut Command) -> Result<()> {
  let program = command.get_program().to_string_lossy().into_owned();
  debug!(program = %program, args = ?command.get_args().collect::<Vec<_>>(), "spawning");

  let status = command.status().map_err(|e| Error::Spawn {
    program: program.clone(),
    source: e,
  })?;

  if !status.success() {
    return Err(Error::CommandFailed {
      program,
      code: status.code(),
    });
  }

  Ok(())
}

/// Run a command to completion, capturing stdout, failing on non-zero
/// exit.
pub fn run_capture(command: &mut Command) -> Result<Vec<u8>> {
  let program = command.get_program().to_string_lossy().into_owned();
  debug!(program = %program, args = ?command.get_args().collect::<Vec<_>>(), "spawning");

  let output = command.output().map_err(|e| Error::Spawn {
    program: program.clone(),
    source: e,
  })?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
      debug!(stderr = %stderr, "command stderr");
    }
    return Err(Error::CommandFailed {
      program,
      code: output.status.code(),
    });
  }

  Ok(output.stdout)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg(unix)]
  fn run_checks_exit_status() {
    assert!(run(&mut Command::new("true")).is_ok());

    let err = run(&mut Command::new("false")).unwrap_err();
    assert!(matches!(err, Error::CommandFailed { code: Some(1), .. }));
  }

  #[test]
  fn missing_program_is_a_spawn_error() {
    let err = run(&mut Command::new("q2kit-no-such-program")).unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
  }

  #[test]
  #[cfg(unix)]
  fn run_capture_returns_stdout() {
    let out = run_capture(Command::new("echo").arg("hello")).unwrap();
    assert_eq!(String::from_utf8_lossy(&out).trim(), "hello");
  }
}

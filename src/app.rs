//! Application orchestration layer
//!
//! Sequences calls to a [`Gopher`] around real work: a wrapped child process, or the
//! scripted demo tour. The gopher itself renders on its own thread; these functions only
//! decide when to start, restyle, and stop it.

use crate::activity::Activity;
use crate::color::Color;
use crate::error::{GopherError, Result};
use crate::indicator::Gopher;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::sleep;

/// Exit code reported when the wrapped command is interrupted with Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Default length of one demo step.
pub const DEFAULT_DEMO_STEP: Duration = Duration::from_millis(4000);

/// A command to run while the gopher animates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Discard the command's stdout and stderr so they do not garble the animation
    pub quiet: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            quiet: false,
        }
    }
}

/// Run `spec` with the gopher animating until it exits.
///
/// Returns the command's exit code, `1` if it was killed by a signal, or
/// [`INTERRUPTED_EXIT_CODE`] if the user pressed Ctrl-C. The gopher is stopped on
/// every path.
pub async fn run_command(gopher: &Gopher, spec: &CommandSpec) -> Result<i32> {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args).kill_on_drop(true);
    if spec.quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let mut child = command
        .spawn()
        .map_err(|err| GopherError::command(&spec.program, err))?;
    log::debug!("spawned `{}` with pid {:?}", spec.program, child.id());

    gopher.start();
    let outcome = tokio::select! {
        status = child.wait() => Some(status),
        _ = tokio::signal::ctrl_c() => None,
    };
    gopher.stop();

    match outcome {
        Some(status) => {
            let status = status.map_err(|err| GopherError::command(&spec.program, err))?;
            log::debug!("`{}` exited with {}", spec.program, status);
            Ok(status.code().unwrap_or(1))
        }
        None => {
            log::debug!("interrupted, killing `{}`", spec.program);
            if let Err(err) = child.kill().await {
                log::warn!("failed to kill `{}`: {}", spec.program, err);
            }
            Ok(INTERRUPTED_EXIT_CODE)
        }
    }
}

/// Walk the gopher through every activity and a few colors, `step` per stage.
pub async fn run_demo(gopher: &Gopher, step: Duration) {
    gopher.start();
    sleep(step).await;

    gopher.set_activity(Activity::Wondering);
    sleep(step).await;

    gopher.set_color(Color::Green);
    sleep(step).await;

    gopher.set_prefix("Hey yo!");
    sleep(step).await;

    gopher.set_activity(Activity::Boring);
    gopher.set_color(Color::Yellow);
    gopher.set_prefix("");
    gopher.set_suffix("Whats up?");
    sleep(step).await;

    gopher.set_activity(Activity::Loving);
    gopher.set_color(Color::Magenta);
    gopher.set_prefix(Activity::Loving.label());
    gopher.set_suffix("");
    sleep(step * 2).await;

    gopher.stop();
}

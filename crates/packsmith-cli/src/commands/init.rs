//! Init command implementation.
//!
//! Runs `npm init` and forwards both of its output streams to our stdout.

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncWriteExt};
use tokio::process::Command;

const NPM: &str = "npm";

/// Execute the init command.
///
/// The outcome is always reported as a line of text: the exit status when
/// the child ran, or the spawn error when it didn't.
pub async fn execute(_args: InitArgs) -> Result<()> {
    if ui::is_ci() {
        ui::warning("npm init is interactive and may wait for input");
    }

    let outcome = run(NPM, &["init"]).await;
    let mut stdout = tokio::io::stdout();
    let line = match &outcome {
        Ok(status) => format!("npm init finished with {status}\n"),
        Err(err) => format!("error: {err}\n"),
    };
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await?;

    match outcome {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(CliError::Process {
            command: "npm init".to_string(),
            reason: format!("exited with {status}"),
        }),
        Err(err) => Err(err),
    }
}

/// Spawn `program` with `args`, relay its stdout and stderr to our stdout,
/// and wait for it to exit.
pub async fn run(program: &str, args: &[&str]) -> Result<ExitStatus> {
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    let process_error = |e: std::io::Error| CliError::Process {
        command: command_line.clone(),
        reason: e.to_string(),
    };

    tracing::debug!(command = %command_line, "spawning");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(process_error)?;

    let out = child.stdout.take().map(|s| tokio::spawn(forward(s)));
    let err = child.stderr.take().map(|s| tokio::spawn(forward(s)));

    let status = child.wait().await.map_err(process_error)?;
    for task in [out, err].into_iter().flatten() {
        // A broken relay only loses output; the exit status still stands.
        if let Ok(Err(e)) = task.await {
            tracing::warn!(error = %e, "output relay stopped early");
        }
    }
    Ok(status)
}

async fn forward<R>(mut stream: R) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin,
{
    let mut stdout = tokio::io::stdout();
    let copied = tokio::io::copy(&mut stream, &mut stdout).await?;
    stdout.flush().await?;
    Ok(copied)
}

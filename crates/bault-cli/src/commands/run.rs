//! Script runner: shell commands read from a file.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use bault_core::error::AppError;
use bault_core::result::AppResult;

use super::shell::{Flow, Session};
use crate::output;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script with one shell command per line
    pub script: PathBuf,

    /// Report failing lines and continue instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,
}

/// Execute a script against the session
pub async fn execute(args: &RunArgs, session: &mut Session) -> AppResult<()> {
    let script = tokio::fs::read_to_string(&args.script)
        .await
        .map_err(|e| {
            AppError::storage(format!(
                "Failed to read script '{}': {}",
                args.script.display(),
                e
            ))
        })?;

    let (executed, failed) = run_script(&script, session, args.keep_going).await?;
    info!(script = %args.script.display(), executed, failed, "Script finished");
    if failed > 0 {
        output::print_warning(&format!("{failed} line(s) failed"));
    }
    Ok(())
}

/// Run each line in order. Returns executed and failed line counts.
pub async fn run_script(
    script: &str,
    session: &mut Session,
    keep_going: bool,
) -> AppResult<(usize, usize)> {
    let mut executed = 0;
    let mut failed = 0;

    for (n, line) in script.lines().enumerate() {
        match session.run_line(line).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => executed += 1,
            Err(e) if keep_going => {
                output::print_error(&format!("line {}: {}", n + 1, e));
                failed += 1;
            }
            Err(e) => {
                return Err(AppError::new(e.kind, format!("line {}: {}", n + 1, e.message)));
            }
        }
    }

    Ok((executed, failed))
}

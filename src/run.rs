//! Application run modes: logger init and task execution.

use std::process::ExitCode;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::task::{Task, TaskOutcome};

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q default.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Resolve and run a task. Soft failures exit 0 unless `--strict` was given.
pub async fn run_task(name: Option<&str>, config: &Config, strict: bool) -> ExitCode {
    let task = match name {
        None => Task::BuildComments,
        Some(name) => match Task::from_name(name) {
            Some(task) => task,
            None => {
                let available: Vec<&str> = Task::ALL.iter().map(|t| t.name()).collect();
                eprintln!(
                    "Error: unknown task '{}' (available: {})",
                    name,
                    available.join(", ")
                );
                return ExitCode::from(2);
            }
        },
    };

    match task.run(config).await {
        TaskOutcome::Completed => ExitCode::SUCCESS,
        TaskOutcome::SoftFailure(err) if strict => {
            eprintln!("Error: {} did not complete: {}", task.name(), err);
            ExitCode::FAILURE
        }
        TaskOutcome::SoftFailure(_) => ExitCode::SUCCESS,
    }
}

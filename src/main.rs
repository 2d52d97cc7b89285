//! # netlify-comments
//!
//! Build-time task that fetches approved comment submissions from a Netlify
//! form, groups them by page path and writes `build/data/comments.json` for
//! the static site build.
//!
//! ## Behaviour
//! - Configuration comes from the environment (optionally a `.env` file)
//! - Any failure is logged and the build carries on (`--strict` to opt out)

mod cli;
mod core;
mod run;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Read once; the task never looks at the environment itself.
    let config = core::config::load().with_build_dir(&args.build_dir);

    match &args.command {
        None => run::run_task(None, &config, args.strict).await,
        Some(Commands::Run { task }) => run::run_task(task.as_deref(), &config, args.strict).await,
        Some(Commands::List) => {
            core::cli::run_list();
            ExitCode::SUCCESS
        }
        Some(Commands::Config) => {
            core::cli::run_config(&config);
            ExitCode::SUCCESS
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}

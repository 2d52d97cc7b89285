//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::config::DEFAULT_BUILD_DIR;

const AFTER_HELP: &str = "\
EXAMPLES:
  netlify-comments                       Run build:comments
  netlify-comments run build:comments    Same, naming the task
  netlify-comments --build-dir public    Write public/data/comments.json
  netlify-comments --strict              Exit non-zero if comments could not be built
  netlify-comments list                  List registered tasks
  netlify-comments config                Show configuration status
  netlify-comments completions bash      Generate bash completions

ENVIRONMENT:
  NETLIFY_APPROVED_COMMENTS_FORM_ID      Form holding approved comments (required)
  NETLIFY_API_AUTH                       Netlify access token (required)
  NETLIFY_API_BASE                       API base URL (default https://api.netlify.com/api/v1)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build-time task that turns approved Netlify form submissions into comments.json",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the task writes into (data/comments.json is created below it)
    #[arg(long, global = true, default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Exit with status 1 when the task could not complete
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (use multiple times for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a build task (default: build:comments)
    Run {
        /// Task name, see `list`
        task: Option<String>,
    },
    /// List registered build tasks
    List,
    /// Show configuration status (the access token is never printed)
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, info, debug, or trace.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "trace"
        } else if self.verbose >= 1 {
            "debug"
        } else {
            "info"
        }
    }
}

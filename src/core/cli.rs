//! CLI-only commands: task list and config info.
//!
//! These run without touching the network and produce plain text output.

use crate::core::app;
use crate::core::config::{ACCESS_TOKEN_VAR, API_BASE_VAR, Config, FORM_ID_VAR};
use crate::core::output;
use crate::core::task::Task;

/// Run the `list` command: one registered task per line.
pub fn run_list() {
    for task in Task::ALL {
        println!("{:<16} {}", task.name(), task.description());
    }
}

/// Run the `config` command: show which values are set and where output goes.
pub fn run_config(config: &Config) {
    let form_id = config.form_id.as_deref().unwrap_or("not set");
    let token = if config.access_token.is_some() {
        "set ✓"
    } else {
        "not set"
    };

    println!("{} {}", app::NAME, app::VERSION);
    println!("{:<34} {}", FORM_ID_VAR, form_id);
    println!("{:<34} {}", ACCESS_TOKEN_VAR, token);
    println!("{:<34} {}", API_BASE_VAR, config.api_base);
    println!(
        "{:<34} {}",
        "Output",
        output::comments_path(&config.build_dir).display()
    );
}

//! Build task registry and the `build:comments` task.
//!
//! A task always completes: failures are logged and reported as
//! [`TaskOutcome::SoftFailure`] so the surrounding build keeps going.

use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::core::comments::CommentMap;
use crate::core::config::Config;
use crate::core::error::TaskError;
use crate::core::netlify::NetlifyClient;
use crate::core::output;

/// Registered build tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    BuildComments,
}

impl Task {
    pub const ALL: &'static [Task] = &[Task::BuildComments];

    pub fn name(self) -> &'static str {
        match self {
            Task::BuildComments => "build:comments",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Task::BuildComments => "Fetch approved comments and write build/data/comments.json",
        }
    }

    pub fn from_name(name: &str) -> Option<Task> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub async fn run(self, config: &Config) -> TaskOutcome {
        debug!("Starting task {}", self.name());
        match self {
            Task::BuildComments => build_comments(config).await,
        }
    }
}

/// How a task finished. A soft failure has already been logged and must not fail the build.
#[derive(Debug)]
pub enum TaskOutcome {
    Completed,
    SoftFailure(TaskError),
}

impl TaskOutcome {
    #[cfg(test)]
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed)
    }
}

/// Fetch approved comments, group them by page path and write them to the build directory.
pub async fn build_comments(config: &Config) -> TaskOutcome {
    match try_build_comments(config).await {
        Ok(path) => {
            info!("Comments data saved.");
            debug!("Wrote {}", path.display());
            TaskOutcome::Completed
        }
        Err(err) => {
            log_failure(&err);
            TaskOutcome::SoftFailure(err)
        }
    }
}

async fn try_build_comments(config: &Config) -> Result<PathBuf, TaskError> {
    let form_id = config.form_id.as_deref().ok_or(TaskError::MissingFormId)?;
    let access_token = config
        .access_token
        .as_deref()
        .ok_or(TaskError::MissingAccessToken)?;

    let client = NetlifyClient::new(&config.api_base, access_token)?;
    let submissions = client.fetch_submissions(form_id).await?;

    let comments = CommentMap::from_submissions(&submissions);
    if comments.is_empty() {
        debug!("No approved comments found");
    } else {
        debug!(
            "Grouped {} comments across {} pages: {}",
            comments.total_comments(),
            comments.len(),
            comments.paths().collect::<Vec<_>>().join(", ")
        );
    }

    output::write_comments(&config.build_dir, &comments).await
}

fn log_failure(err: &TaskError) {
    match err {
        TaskError::Fetch(detail) => {
            error!("{}", err);
            debug!("{}", detail);
        }
        _ if err.is_config() => warn!("{}", err),
        _ => error!("{}", err),
    }
}

pub mod app;
pub mod cli;
pub mod comments;
pub mod config;
pub mod error;
pub mod gravatar;
pub mod netlify;
pub mod output;
pub mod submission;
pub mod task;

//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::batch::BatchError;
use crate::rule_table::RuleTableError;
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    RuleTable(#[from] RuleTableError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] io::Error),
}

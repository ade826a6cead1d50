//! Model inventory scanning
//!
//! Runs the Python `scan-cache` CLI and turns its stdout into a list of model
//! records. Records are passed through as raw JSON values; their layout belongs
//! to the CLI.

use crate::bin_resolver::{self, Binary};
use crate::config::HostConfig;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

const SCAN_MODULE: &str = "backend.model_manager.scan_cli";
const SCAN_SUBCOMMAND: &str = "scan-cache";

#[derive(Error, Debug)]
pub enum ScanError {
    /// The interpreter could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The CLI ran but exited with a non-zero code or was killed.
    #[error("scan-cache exited with {}: {stderr}", describe_code(.code))]
    ExternalProcessFailure { code: Option<i32>, stderr: String },

    /// Exit code was zero but stdout is not a JSON array.
    #[error("scan-cache output is not a JSON array: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// What one run of the CLI left behind.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl From<std::process::Output> for ScanOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

impl ScanOutput {
    /// Applies the CLI contract: exit code 0 and a JSON array on stdout.
    pub fn into_records(self) -> Result<Vec<Value>, ScanError> {
        if self.code != Some(0) {
            return Err(ScanError::ExternalProcessFailure {
                code: self.code,
                stderr: String::from_utf8_lossy(&self.stderr).trim_end().to_string(),
            });
        }

        let records: Vec<Value> = serde_json::from_slice(&self.stdout)?;
        Ok(records)
    }
}

/// A fully resolved invocation of the scanner.
///
/// Built once at startup and shared with every `list_models` call; holds no
/// mutable state, so concurrent scans simply run side by side.
#[derive(Debug, Clone)]
pub struct ModelScanner {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ModelScanner {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }

    /// `<python> -m backend.model_manager.scan_cli scan-cache [--cache-root DIR]`
    /// run from the project root.
    pub fn from_config(config: &HostConfig) -> Self {
        let program = bin_resolver::resolve_bin(&config.project_root, Binary::Python);

        let mut args = vec![
            "-m".to_string(),
            SCAN_MODULE.to_string(),
            SCAN_SUBCOMMAND.to_string(),
        ];
        if let Some(cache_root) = &config.cache_root {
            args.push("--cache-root".to_string());
            args.push(cache_root.to_string_lossy().to_string());
        }

        Self::new(program, args, &config.project_root)
    }

    /// Runs the CLI to completion and parses its output.
    pub async fn scan(&self) -> Result<Vec<Value>, ScanError> {
        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .map_err(|source| ScanError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        ScanOutput::from(output).into_records()
    }

    /// Like [`scan`](Self::scan), but every failure is logged and reported as
    /// an empty list. Callers cannot tell "no models" from "scan failed".
    pub async fn scan_or_empty(&self) -> Vec<Value> {
        records_or_empty(self.scan().await)
    }
}

/// Collapses a scan result into the list handed to the UI.
pub fn records_or_empty(result: Result<Vec<Value>, ScanError>) -> Vec<Value> {
    match result {
        Ok(records) => {
            log::info!("[list-models] scan-cache returned {} record(s)", records.len());
            records
        }
        Err(ScanError::ExternalProcessFailure { code, stderr }) => {
            log::error!("[list-models] CLI error ({}): {}", describe_code(&code), stderr);
            Vec::new()
        }
        Err(ScanError::MalformedOutput(e)) => {
            log::error!("[list-models] JSON parse error: {}", e);
            Vec::new()
        }
        Err(e) => {
            log::error!("[list-models] {}", e);
            Vec::new()
        }
    }
}

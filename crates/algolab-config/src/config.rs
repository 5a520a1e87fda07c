// crates/algolab-config/src/config.rs
// ============================================================================
// Module: AlgoLab Configuration
// Description: Configuration loading and validation for the algolab binary.
// Purpose: Provide strict config parsing with hard limits.
// Dependencies: algolab-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! When no path is given and neither `ALGOLAB_CONFIG` nor `algolab.toml`
//! exists, defaults apply; an explicitly named file must exist.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use algolab_core::DEFAULT_MATRIX_THREADS;
use algolab_core::MultiplyAlgorithm;
use algolab_core::MultiplyOptions;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "algolab.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "ALGOLAB_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Largest accepted matrix leaf size.
pub(crate) const MAX_LEAF_SIZE: usize = 4096;
/// Largest accepted worker pool size.
pub(crate) const MAX_WORKER_THREADS: usize = 256;
/// Largest accepted benchmark matrix size.
pub(crate) const MAX_BENCH_SIZE: usize = 4096;
/// Maximum number of benchmark sizes.
pub(crate) const MAX_BENCH_SIZES: usize = 32;
/// Maximum timed iterations per benchmark case.
pub(crate) const MAX_BENCH_ITERATIONS: u32 = 1000;
/// Maximum warmup iterations per benchmark case.
pub(crate) const MAX_BENCH_WARMUP: u32 = 100;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level `algolab.toml` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgoLabConfig {
    /// Matrix multiplication tuning.
    #[serde(default)]
    pub matrix: MatrixConfig,
    /// Benchmark plan for `algolab matrix bench`.
    #[serde(default)]
    pub bench: BenchConfig,
    /// Run-event logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AlgoLabConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: `path`, then `ALGOLAB_CONFIG`, then `algolab.toml`
    /// in the working directory. Only the last may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matrix.validate()?;
        self.bench.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Multiplication options derived from `[matrix]`.
    #[must_use]
    pub const fn multiply_options(&self) -> MultiplyOptions {
        MultiplyOptions {
            leaf_size: self.matrix.leaf_size,
            parallel_threshold: self.matrix.parallel_threshold,
        }
    }
}

/// Matrix multiplication tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// Blocks at or below this size use the classic product.
    #[serde(default = "default_leaf_size")]
    pub leaf_size: usize,
    /// Blocks at or above this size fork onto the worker pool.
    #[serde(default)]
    pub parallel_threshold: Option<usize>,
    /// Worker pool size; `0` picks rayon's default.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            leaf_size: default_leaf_size(),
            parallel_threshold: None,
            worker_threads: default_worker_threads(),
        }
    }
}

impl MatrixConfig {
    /// Validates matrix configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.leaf_size == 0 || self.leaf_size > MAX_LEAF_SIZE {
            return Err(ConfigError::Invalid("matrix.leaf_size out of range".to_string()));
        }
        if self.parallel_threshold == Some(0) {
            return Err(ConfigError::Invalid(
                "matrix.parallel_threshold must be positive".to_string(),
            ));
        }
        if self.worker_threads > MAX_WORKER_THREADS {
            return Err(ConfigError::Invalid("matrix.worker_threads out of range".to_string()));
        }
        Ok(())
    }
}

/// Benchmark plan for matrix multiplication timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Matrix sizes to time.
    #[serde(default = "default_bench_sizes")]
    pub sizes: Vec<usize>,
    /// Timed runs per size and strategy.
    #[serde(default = "default_bench_iterations")]
    pub iterations: u32,
    /// Untimed runs before timing starts.
    #[serde(default = "default_bench_warmup")]
    pub warmup: u32,
    /// Strategies to time.
    #[serde(default = "default_bench_algorithms")]
    pub algorithms: Vec<MultiplyAlgorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_bench_sizes(),
            iterations: default_bench_iterations(),
            warmup: default_bench_warmup(),
            algorithms: default_bench_algorithms(),
        }
    }
}

impl BenchConfig {
    /// Validates benchmark configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("bench.sizes must be non-empty".to_string()));
        }
        if self.sizes.len() > MAX_BENCH_SIZES {
            return Err(ConfigError::Invalid("bench.sizes too many entries".to_string()));
        }
        if self.sizes.iter().any(|size| *size == 0 || *size > MAX_BENCH_SIZE) {
            return Err(ConfigError::Invalid("bench.sizes entry out of range".to_string()));
        }
        if self.iterations == 0 || self.iterations > MAX_BENCH_ITERATIONS {
            return Err(ConfigError::Invalid("bench.iterations out of range".to_string()));
        }
        if self.warmup > MAX_BENCH_WARMUP {
            return Err(ConfigError::Invalid("bench.warmup out of range".to_string()));
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid("bench.algorithms must be non-empty".to_string()));
        }
        Ok(())
    }
}

/// Destination for run events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSink {
    /// Discard events.
    #[default]
    None,
    /// Write JSON lines to stderr.
    Stderr,
    /// Append JSON lines to `logging.path`.
    File,
}

/// Run-event logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Where events go.
    #[serde(default)]
    pub sink: LogSink,
    /// Event file for the `file` sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl LoggingConfig {
    /// Validates logging configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (&self.sink, &self.path) {
            (LogSink::File, None) => {
                Err(ConfigError::Invalid("logging.path is required for the file sink".to_string()))
            }
            (_, Some(path)) => validate_path_string("logging.path", path),
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path and whether the file must exist.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Default matrix leaf size.
pub(crate) const fn default_leaf_size() -> usize {
    32
}

/// Default worker pool size.
pub(crate) const fn default_worker_threads() -> usize {
    DEFAULT_MATRIX_THREADS
}

/// Default benchmark sizes.
pub(crate) fn default_bench_sizes() -> Vec<usize> {
    vec![64, 128, 256]
}

/// Default timed iterations.
pub(crate) const fn default_bench_iterations() -> u32 {
    5
}

/// Default warmup iterations.
pub(crate) const fn default_bench_warmup() -> u32 {
    1
}

/// Default benchmarked strategies.
pub(crate) fn default_bench_algorithms() -> Vec<MultiplyAlgorithm> {
    MultiplyAlgorithm::ALL.to_vec()
}

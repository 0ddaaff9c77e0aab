//! Workspace-wide constants.

/// Decimal digits kept for similarity scores before comparison.
pub const DEFAULT_SCORE_PRECISION: u32 = 2;

/// Decimal digits kept for reported rank correlation coefficients.
pub const DEFAULT_CORRELATION_PRECISION: u32 = 4;

/// Decimal digits kept for reported coverage percentages.
pub const DEFAULT_COVERAGE_PRECISION: u32 = 2;

/// Upper bound accepted for any configured precision.
pub const MAX_PRECISION: u32 = 10;

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "WORDSIM_LOG";

/// Log level used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "wordsim.toml";

/// Stand-in for an unbounded similarity (identical senses under
/// Jiang-Conrath, or a sense never observed in the IC corpus).
pub const UNBOUNDED_SIMILARITY: f64 = 1e300;

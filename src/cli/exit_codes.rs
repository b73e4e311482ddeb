//! Exit codes for the CLI
//!
//! Standard exit codes used by the BiasLens CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Scan found nothing, or stayed within `--max-score` |
//! | 1 | `BIAS_DETECTED` | Findings | At least one rule matched |
//! | 2 | `ERROR` | Runtime error | File not found, invalid config |
//! | 3 | `INVALID_ARGS` | Invalid arguments | Every `--only` category unknown |

/// Success - no findings or operation completed successfully.
pub const SUCCESS: i32 = 0;

/// Bias findings detected by a scan.
pub const BIAS_DETECTED: i32 = 1;

/// Runtime error (file not found, invalid configuration, etc.).
pub const ERROR: i32 = 2;

/// Invalid arguments (no usable category left after filtering, etc.).
pub const INVALID_ARGS: i32 = 3;

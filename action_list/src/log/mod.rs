// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup. Logging is off unless one of the `try_initialize_logging_*`
//! functions is called. The `tracing::*!` calls sprinkled through the crate are no-ops
//! until then.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;

/*
 *   Copyright (c) 2024-2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use crate::{CommonResult, ok};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [tracing_subscriber::fmt::format::Pretty] and
/// [tracing_subscriber::fmt::format::Compact] are mutually exclusive.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system, see
/// [try_initialize_logging_global] and [try_initialize_logging_thread_local] for that.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> CommonResult<Vec<Box<DynLayer<Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    ok!(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    ok!(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    ok!(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

/// Global default subscriber, which once set, can't be unset or changed. This is the
/// one the `alist` binary uses.
///
/// Logging is **DISABLED** when the level filter is [LevelFilter::OFF].
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    let layers = try_create_layers(&config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()?;

    ok!()
}

/// Thread local subscriber, which is great for tests. Logging stops when the returned
/// guard is dropped.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<DefaultGuard>> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return ok!(None);
    }

    let layers = try_create_layers(&config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    ok!(Some(tracing::subscriber::set_default(subscriber)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_log_file() -> (PathBuf, PathBuf) {
        let dir =
            std::env::temp_dir().join(format!("r3bl_action_list_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let file_path = dir.join("alist_test.log");
        (dir, file_path)
    }

    #[test]
    fn test_try_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stdout);
        let layer: Option<Box<DynLayer<Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, writer_config).unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_no_writer_no_layers() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        };
        let layers = try_create_layers(&config).unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn test_try_create_both_layers() {
        let (dir, file_path) = temp_log_file();
        let config = TracingConfig::new_file_and_display(
            Some(file_path.to_str().unwrap().to_string()),
            DisplayPreference::Stderr,
        );

        let layers = try_create_layers(&config).unwrap();

        assert_eq!(layers.len(), 3);
        assert!(file_path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_thread_local_writes_to_file() {
        let (dir, file_path) = temp_log_file();
        let config = TracingConfig::new_file(Some(file_path.to_str().unwrap().to_string()))
            .with_level_filter(LevelFilter::INFO);

        let guard = try_initialize_logging_thread_local(config).unwrap();
        tracing::info!(message = "item composed", key = "copy");
        tracing::debug!(message = "filtered out");
        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("item composed"));
        assert!(output.contains("key=\"copy\""));
        assert!(!output.contains("filtered out"));
        std::fs::remove_dir_all(&dir).ok();
    }
}

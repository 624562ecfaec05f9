/*
 *   Copyright (c) 2026 R3BL LLC
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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The composition pipeline itself never fails: every branch falls back to a default
//! (no role, omitted attribute, empty slot). Errors only show up at the edges, when a
//! list description is loaded from disk, when logging is set up, or when a caller
//! supplied select handler fails.

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// Select handlers return this type, and their errors flow through
/// [`crate::ActionListItem::handle_event`] untouched.
pub type CommonResult<T> = miette::Result<T>;

/// Errors raised at the edges of the crate.
///
/// | Variant          | Cause                                                |
/// | :--------------- | :--------------------------------------------------- |
/// | [`ConfigRead`]   | The list description file could not be read          |
/// | [`ConfigParse`]  | The list description is not valid JSON for the model |
/// | [`UnknownItem`]  | A select was requested for a key that is not listed  |
/// | [`DuplicateKey`] | Two items in one list description share a key        |
/// | [`LogFile`]      | The log file path has no parent or no file name      |
///
/// [`ConfigRead`]: Self::ConfigRead
/// [`ConfigParse`]: Self::ConfigParse
/// [`UnknownItem`]: Self::UnknownItem
/// [`DuplicateKey`]: Self::DuplicateKey
/// [`LogFile`]: Self::LogFile
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ActionListError {
    #[error("📑 Could not read list description from '{path}'")]
    #[diagnostic(
        code(r3bl_action_list::config::read),
        help("Check that the file exists and is readable")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("🔍 Could not parse list description")]
    #[diagnostic(
        code(r3bl_action_list::config::parse),
        help("The document must be a JSON object with optional `list`, `group`, \
              `container` scopes and an `items` array")
    )]
    ConfigParse(#[source] serde_json::Error),

    #[error("❌ No item with key '{key}' in this list")]
    #[diagnostic(code(r3bl_action_list::item::unknown_key))]
    UnknownItem { key: String },

    #[error("🔁 More than one item has the key '{key}'")]
    #[diagnostic(
        code(r3bl_action_list::config::duplicate_key),
        help("Every item in a list needs its own key, the generated ids are derived \
              from it")
    )]
    DuplicateKey { key: String },

    #[error("📦 Can't use '{path}' as a log file")]
    #[diagnostic(
        code(r3bl_action_list::log::file),
        help("The path needs an existing parent folder and a file name")
    )]
    LogFile { path: String },
}

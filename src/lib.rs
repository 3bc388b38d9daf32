/*!
 * # episplit - Screenplay Episode Splitter
 *
 * A Rust library for splitting plain-text screenplays into episodes.
 *
 * ## Features
 *
 * - Detect episode headings in a dozen textual variants
 *   (第1集, 第十二集, 【第3集】标题, 《第一集》.标题, ...)
 * - Resolve Chinese numerals (一 through 九十九, bare 百 forms) and
 *   decimal episode numbers
 * - Compute contiguous content spans from heading positions, with a
 *   whole-document fallback when no heading is found
 * - Serialize the result to a structured JSON record per episode
 * - Batch processing of script folders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script_processor`: Heading scanning, boundary composition and
 *   episode assembly
 * - `numeral_utils`: Chinese/decimal numeral resolution
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod numeral_utils;
pub mod script_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ScriptError};
pub use numeral_utils::{chinese_to_number, resolve_episode_number};
pub use script_processor::{Episode, EpisodeCollection, HeadingMatch};

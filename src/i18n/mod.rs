// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization using the Fluent localization system.
//! The notification service only needs a handful of fixed phrases and the
//! layout direction of the active locale; both are resolved once when the
//! service is built.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded in the binary
//! - Right-to-left detection for dialog layout
//! - Fallback to `en-US` when no locale matches

pub mod fluent;
mod phrases;

pub use fluent::{is_right_to_left, I18n};
pub use phrases::{button_labels, Phrases};

// SPDX-License-Identifier: MPL-2.0
//! `message_service` coordinates modal notifications for a desktop application.
//!
//! Any thread can ask a [`NotificationService`] to show an informational
//! message, a warning, a fatal error, or a question. The service composes the
//! text from plain strings, failures and line blocks, marshals the dialog onto
//! the UI thread of the topmost window, and keeps a count of dialogs on
//! screen so background work can hold off while the user is interrupted.
//!
//! Dialogs are drawn by a pluggable [`dialog::DialogBackend`]: native message
//! boxes through `rfd`, or a headless backend for tests and servers. Phrases
//! are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/message_service/0.1.0")]

pub mod clipboard;
pub mod config;
pub mod dialog;
pub mod dispatch;
pub mod error;
pub mod i18n;
pub mod message;
pub mod service;
pub mod swatch;

pub use error::{Error, Result};
pub use message::{Failure, MessageInput};
pub use service::{MessageCountGuard, NotificationService};

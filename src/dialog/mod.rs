// SPDX-License-Identifier: MPL-2.0
//! Modal dialog primitives.
//!
//! The notification service never draws anything itself. It hands a fully
//! composed [`NotificationRequest`] to a [`DialogBackend`] chosen when the
//! service is built:
//!
//! - [`NativeDialogs`] shows a native message box through `rfd`
//! - [`HeadlessDialogs`] shows nothing and answers with the default button,
//!   for automated and headless environments

mod headless;
mod native;
mod request;

pub use headless::HeadlessDialogs;
pub use native::{ButtonLabels, NativeDialogs};
pub use request::{ButtonSet, DefaultButton, DialogIcon, NotificationRequest, Outcome};

use crate::dispatch::OwnerWindow;
use crate::error::DialogError;

/// Capability to display a modal message and report the pressed button.
///
/// Implementations are called on the thread that owns `owner` when there is
/// one, otherwise on the calling thread.
pub trait DialogBackend: Send + Sync {
    /// Shows `request` and blocks until the user answers.
    ///
    /// # Errors
    ///
    /// Returns a [`DialogError`] if the dialog cannot be displayed.
    fn show(
        &self,
        owner: Option<&OwnerWindow>,
        request: &NotificationRequest,
    ) -> Result<Outcome, DialogError>;
}

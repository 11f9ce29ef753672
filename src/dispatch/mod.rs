// SPDX-License-Identifier: MPL-2.0
//! Thread marshaling for dialog display.
//!
//! Dialogs must be shown by the thread that owns the application's windows.
//! This module provides the pieces the notification service uses to get
//! there:
//!
//! - [`UiLoop`] / [`UiThread`]: a work queue owned by the UI thread
//! - [`UiHandle`]: submit a closure to that queue and wait for its result
//! - [`WindowRegistry`]: open windows, the topmost of which owns new dialogs
//!
//! # Example
//!
//! ```
//! use message_service::dispatch::{UiThread, WindowRegistry};
//!
//! let ui = UiThread::spawn("ui").expect("spawn UI thread");
//! let windows = WindowRegistry::new();
//! let _main = windows.open("Main", ui.handle());
//!
//! let owner = windows.topmost().expect("main window is open");
//! let answer = owner.ui().invoke(|| 6 * 7).expect("UI loop is running");
//! assert_eq!(answer, 42);
//! ```

mod ui_loop;
mod windows;

pub use ui_loop::{UiHandle, UiLoop, UiThread};
pub use windows::{OwnerWindow, ParentWindow, WindowGuard, WindowId, WindowRegistry};

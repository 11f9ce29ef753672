// SPDX-License-Identifier: MPL-2.0
//! Message inputs and the composer that turns them into dialog text.
//!
//! Callers hand the service an ordered list of [`MessageInput`] values:
//! plain text, structured [`Failure`]s, or blocks of lines. [`compose`]
//! flattens them into one string with a two-tier separator rule:
//!
//! - [`NEW_PARAGRAPH`] between independent blocks
//! - [`NEW_LINE`] between the items of one [`MessageInput::Lines`] block
//!
//! # Example
//!
//! ```
//! use message_service::message::{compose, MessageInput};
//!
//! let text = compose(
//!     [
//!         MessageInput::from("Could not open the file."),
//!         MessageInput::lines(["first.txt", "second.txt"]),
//!     ],
//!     false,
//! );
//! assert_eq!(text, "Could not open the file.\n\nfirst.txt\nsecond.txt");
//! ```

mod compose;
mod input;

pub use compose::{compose, NEW_LINE, NEW_PARAGRAPH};
pub use input::{Failure, FailureKind, MessageInput};

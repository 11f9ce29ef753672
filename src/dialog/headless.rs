// SPDX-License-Identifier: MPL-2.0
//! Dialog backend for environments without a display.

use super::{DialogBackend, NotificationRequest, Outcome};
use crate::dispatch::OwnerWindow;
use crate::error::DialogError;

/// Shows nothing; logs the request and answers immediately.
///
/// The answer is the request's default button unless a fixed answer was
/// configured with [`HeadlessDialogs::answering`] and that answer belongs to
/// the requested button set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessDialogs {
    answer: Option<Outcome>,
}

impl HeadlessDialogs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every dialog offering `outcome` with it.
    #[must_use]
    pub fn answering(outcome: Outcome) -> Self {
        Self {
            answer: Some(outcome),
        }
    }
}

impl DialogBackend for HeadlessDialogs {
    fn show(
        &self,
        _owner: Option<&OwnerWindow>,
        request: &NotificationRequest,
    ) -> Result<Outcome, DialogError> {
        let outcome = self
            .answer
            .filter(|answer| request.buttons.contains(*answer))
            .unwrap_or_else(|| request.buttons.default_outcome(request.default_button));

        tracing::info!(
            title = %request.title,
            icon = ?request.icon,
            outcome = ?outcome,
            "{}",
            request.body
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{ButtonSet, DefaultButton};

    #[test]
    fn answers_with_default_button() {
        let request = NotificationRequest::new("t", "b")
            .buttons(ButtonSet::YesNo)
            .default_button(DefaultButton::Second);

        assert_eq!(HeadlessDialogs::new().show(None, &request), Ok(Outcome::No));
    }

    #[test]
    fn fixed_answer_is_used_when_offered() {
        let request = NotificationRequest::new("t", "b").buttons(ButtonSet::YesNoCancel);
        let dialogs = HeadlessDialogs::answering(Outcome::Cancel);

        assert_eq!(dialogs.show(None, &request), Ok(Outcome::Cancel));
    }

    #[test]
    fn fixed_answer_outside_button_set_falls_back_to_default() {
        let request = NotificationRequest::new("t", "b");
        let dialogs = HeadlessDialogs::answering(Outcome::Yes);

        assert_eq!(dialogs.show(None, &request), Ok(Outcome::Ok));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Native message boxes through `rfd`.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use super::{ButtonSet, DialogBackend, DialogIcon, NotificationRequest, Outcome};
use crate::dispatch::OwnerWindow;
use crate::error::DialogError;

/// Labels for buttons that native message boxes do not provide themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub abort: String,
    pub retry: String,
    pub ignore: String,
    pub cancel: String,
    pub try_again: String,
    pub continue_: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            abort: "Abort".to_string(),
            retry: "Retry".to_string(),
            ignore: "Ignore".to_string(),
            cancel: "Cancel".to_string(),
            try_again: "Try Again".to_string(),
            continue_: "Continue".to_string(),
        }
    }
}

/// Dialog backend showing native message boxes.
///
/// Button sets without a native equivalent are rendered with custom labels.
/// Dialogs are parented to the owner's native window when it registered one.
/// `rfd` has no notion of a focused default button or of right-to-left
/// reading order, so those request fields are not forwarded.
#[derive(Debug, Clone, Default)]
pub struct NativeDialogs {
    labels: ButtonLabels,
}

impl NativeDialogs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_labels(labels: ButtonLabels) -> Self {
        Self { labels }
    }

    fn level(icon: DialogIcon) -> MessageLevel {
        match icon {
            DialogIcon::Warning => MessageLevel::Warning,
            DialogIcon::Error => MessageLevel::Error,
            DialogIcon::None | DialogIcon::Info | DialogIcon::Question => MessageLevel::Info,
        }
    }

    fn buttons(&self, set: ButtonSet) -> MessageButtons {
        let l = &self.labels;
        match set {
            ButtonSet::Ok => MessageButtons::Ok,
            ButtonSet::OkCancel => MessageButtons::OkCancel,
            ButtonSet::YesNo => MessageButtons::YesNo,
            ButtonSet::YesNoCancel => MessageButtons::YesNoCancel,
            ButtonSet::AbortRetryIgnore => MessageButtons::YesNoCancelCustom(
                l.abort.clone(),
                l.retry.clone(),
                l.ignore.clone(),
            ),
            ButtonSet::RetryCancel => {
                MessageButtons::OkCancelCustom(l.retry.clone(), l.cancel.clone())
            }
            ButtonSet::CancelTryContinue => MessageButtons::YesNoCancelCustom(
                l.cancel.clone(),
                l.try_again.clone(),
                l.continue_.clone(),
            ),
        }
    }

    /// Maps a custom button label back to its outcome.
    fn custom_outcome(&self, set: ButtonSet, label: &str) -> Option<Outcome> {
        let l = &self.labels;
        let candidates: &[(&str, Outcome)] = &[
            (l.abort.as_str(), Outcome::Abort),
            (l.retry.as_str(), Outcome::Retry),
            (l.ignore.as_str(), Outcome::Ignore),
            (l.cancel.as_str(), Outcome::Cancel),
            (l.try_again.as_str(), Outcome::TryAgain),
            (l.continue_.as_str(), Outcome::Continue),
        ];
        candidates
            .iter()
            .find(|(text, outcome)| *text == label && set.contains(*outcome))
            .map(|(_, outcome)| *outcome)
    }

    /// Translates an `rfd` result into an outcome of `set`.
    ///
    /// Some platforms report custom buttons positionally as yes/no/cancel or
    /// ok/cancel; those are mapped by position. Closing the box reports
    /// `Cancel`, which becomes the last button for sets without one.
    fn outcome(&self, set: ButtonSet, result: MessageDialogResult) -> Result<Outcome, DialogError> {
        let outcomes = set.outcomes();
        let outcome = match result {
            MessageDialogResult::Custom(label) => self
                .custom_outcome(set, &label)
                .ok_or(DialogError::UnexpectedResult(label))?,
            MessageDialogResult::Ok => Outcome::Ok,
            MessageDialogResult::Yes => Outcome::Yes,
            MessageDialogResult::No => Outcome::No,
            MessageDialogResult::Cancel => Outcome::Cancel,
        };

        if set.contains(outcome) {
            return Ok(outcome);
        }

        let positional = match outcome {
            Outcome::Yes | Outcome::Ok => outcomes.first(),
            Outcome::No => outcomes.get(1),
            Outcome::Cancel => outcomes.last(),
            _ => None,
        };
        positional
            .copied()
            .ok_or_else(|| DialogError::UnexpectedResult(format!("{outcome:?} for {set:?}")))
    }
}

impl DialogBackend for NativeDialogs {
    fn show(
        &self,
        owner: Option<&OwnerWindow>,
        request: &NotificationRequest,
    ) -> Result<Outcome, DialogError> {
        tracing::trace!(
            owner = ?owner.map(OwnerWindow::title),
            parented = owner.is_some_and(|o| o.parent().is_some()),
            title = %request.title,
            buttons = ?request.buttons,
            right_to_left = request.right_to_left,
            "showing native message box"
        );

        let mut dialog = MessageDialog::new()
            .set_level(Self::level(request.icon))
            .set_title(&request.title)
            .set_description(&request.body)
            .set_buttons(self.buttons(request.buttons));
        if let Some(parent) = owner.and_then(OwnerWindow::parent) {
            dialog = dialog.set_parent(parent);
        }

        let result = dialog.show();

        self.outcome(request.buttons, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_map_to_levels() {
        assert!(matches!(NativeDialogs::level(DialogIcon::Error), MessageLevel::Error));
        assert!(matches!(NativeDialogs::level(DialogIcon::Warning), MessageLevel::Warning));
        assert!(matches!(NativeDialogs::level(DialogIcon::Question), MessageLevel::Info));
    }

    #[test]
    fn standard_results_map_directly() {
        let dialogs = NativeDialogs::new();
        assert_eq!(
            dialogs.outcome(ButtonSet::YesNo, MessageDialogResult::Yes),
            Ok(Outcome::Yes)
        );
        assert_eq!(
            dialogs.outcome(ButtonSet::OkCancel, MessageDialogResult::Cancel),
            Ok(Outcome::Cancel)
        );
    }

    #[test]
    fn custom_labels_map_back_to_outcomes() {
        let dialogs = NativeDialogs::new();
        assert_eq!(
            dialogs.outcome(
                ButtonSet::AbortRetryIgnore,
                MessageDialogResult::Custom("Ignore".into())
            ),
            Ok(Outcome::Ignore)
        );
        assert_eq!(
            dialogs.outcome(
                ButtonSet::CancelTryContinue,
                MessageDialogResult::Custom("Try Again".into())
            ),
            Ok(Outcome::TryAgain)
        );
    }

    #[test]
    fn positional_results_map_for_custom_sets() {
        let dialogs = NativeDialogs::new();
        assert_eq!(
            dialogs.outcome(ButtonSet::AbortRetryIgnore, MessageDialogResult::No),
            Ok(Outcome::Retry)
        );
        assert_eq!(
            dialogs.outcome(ButtonSet::RetryCancel, MessageDialogResult::Ok),
            Ok(Outcome::Retry)
        );
    }

    #[test]
    fn closing_an_ok_box_reports_ok() {
        let dialogs = NativeDialogs::new();
        assert_eq!(
            dialogs.outcome(ButtonSet::Ok, MessageDialogResult::Cancel),
            Ok(Outcome::Ok)
        );
    }

    #[test]
    fn unknown_custom_label_is_an_error() {
        let dialogs = NativeDialogs::new();
        let result =
            dialogs.outcome(ButtonSet::RetryCancel, MessageDialogResult::Custom("?".into()));
        assert!(matches!(result, Err(DialogError::UnexpectedResult(_))));
    }
}

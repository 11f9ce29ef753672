// SPDX-License-Identifier: MPL-2.0
//! Dialog request and outcome types.

/// Buttons offered by a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSet {
    #[default]
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
    AbortRetryIgnore,
    RetryCancel,
    CancelTryContinue,
}

impl ButtonSet {
    /// Outcomes this button set can produce, in display order.
    #[must_use]
    pub fn outcomes(self) -> &'static [Outcome] {
        match self {
            ButtonSet::Ok => &[Outcome::Ok],
            ButtonSet::OkCancel => &[Outcome::Ok, Outcome::Cancel],
            ButtonSet::YesNo => &[Outcome::Yes, Outcome::No],
            ButtonSet::YesNoCancel => &[Outcome::Yes, Outcome::No, Outcome::Cancel],
            ButtonSet::AbortRetryIgnore => &[Outcome::Abort, Outcome::Retry, Outcome::Ignore],
            ButtonSet::RetryCancel => &[Outcome::Retry, Outcome::Cancel],
            ButtonSet::CancelTryContinue => {
                &[Outcome::Cancel, Outcome::TryAgain, Outcome::Continue]
            }
        }
    }

    /// Outcome of the button at `default`, clamped to the last button.
    #[must_use]
    pub fn default_outcome(self, default: DefaultButton) -> Outcome {
        let outcomes = self.outcomes();
        let index = default.index().min(outcomes.len() - 1);
        outcomes[index]
    }

    /// Returns true if `outcome` belongs to this button set.
    #[must_use]
    pub fn contains(self, outcome: Outcome) -> bool {
        self.outcomes().contains(&outcome)
    }
}

/// Icon shown next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogIcon {
    #[default]
    None,
    Info,
    Warning,
    Error,
    Question,
}

/// Ordinal of the button focused when the dialog opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultButton {
    #[default]
    First,
    Second,
    Third,
}

impl DefaultButton {
    /// Zero-based button index.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DefaultButton::First => 0,
            DefaultButton::Second => 1,
            DefaultButton::Third => 2,
        }
    }
}

/// The button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ok,
    Cancel,
    Yes,
    No,
    Abort,
    Retry,
    Ignore,
    TryAgain,
    Continue,
}

/// A fully composed dialog, ready for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub buttons: ButtonSet,
    pub icon: DialogIcon,
    pub default_button: DefaultButton,
    /// Lay the text out right-to-left.
    pub right_to_left: bool,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = buttons;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: DialogIcon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn default_button(mut self, default_button: DefaultButton) -> Self {
        self.default_button = default_button;
        self
    }

    #[must_use]
    pub fn right_to_left(mut self, right_to_left: bool) -> Self {
        self.right_to_left = right_to_left;
        self
    }
}

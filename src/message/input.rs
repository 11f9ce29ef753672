// SPDX-License-Identifier: MPL-2.0
//! Tagged message inputs accepted by the composer.

use std::error::Error as StdError;
use std::fmt;

/// Classification of a failure, as decided by whoever produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureKind {
    /// Any failure without special presentation rules.
    #[default]
    Other,
    /// The resource is locked by another process. Load/save warnings show
    /// such failures verbatim, without their usual boilerplate.
    FileLocked,
}

/// A structured failure rendered into a message.
///
/// The summary form is the top-level message only; the verbose form adds
/// each cause of the chain on its own line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Failure {
    message: String,
    causes: Vec<String>,
    kind: FailureKind,
    verbose: Option<bool>,
}

impl Failure {
    /// Creates a failure with the given top-level message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Creates a failure describing a resource locked by another process.
    pub fn file_locked(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(FailureKind::FileLocked)
    }

    /// Captures an error and its whole `source()` chain.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: err.to_string(),
            causes,
            ..Self::default()
        }
    }

    /// Appends a cause to the end of the chain.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: FailureKind) -> Self {
        self.kind = kind;
        self
    }

    /// Forces full (`true`) or summary (`false`) rendering of this failure,
    /// overriding the flag passed to the composer.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[must_use]
    pub fn is_file_locked(&self) -> bool {
        self.kind == FailureKind::FileLocked
    }

    /// Renders the failure as human-readable text.
    ///
    /// A per-failure verbosity override wins over `verbose`.
    #[must_use]
    pub fn render(&self, verbose: bool) -> String {
        let verbose = self.verbose.unwrap_or(verbose);
        let message = self.message.trim();
        if !verbose {
            return message.to_string();
        }

        let mut out = String::from(message);
        for cause in self.causes.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
            if !out.is_empty() {
                out.push_str(super::NEW_LINE);
            }
            out.push_str(cause);
        }
        out
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One entry of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageInput {
    /// Plain text, one paragraph.
    Text(String),
    /// A failure, rendered in summary or verbose form.
    Failure(Failure),
    /// A block of lines kept together with single line breaks.
    Lines(Vec<String>),
}

impl MessageInput {
    /// Builds a [`MessageInput::Lines`] block from any string iterator.
    pub fn lines<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MessageInput::Lines(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for MessageInput {
    fn from(text: &str) -> Self {
        MessageInput::Text(text.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(text: String) -> Self {
        MessageInput::Text(text)
    }
}

impl From<Failure> for MessageInput {
    fn from(failure: Failure) -> Self {
        MessageInput::Failure(failure)
    }
}

impl From<&Failure> for MessageInput {
    fn from(failure: &Failure) -> Self {
        MessageInput::Failure(failure.clone())
    }
}

/// An absent entry composes to nothing.
impl<T: Into<MessageInput>> From<Option<T>> for MessageInput {
    fn from(input: Option<T>) -> Self {
        input.map_or_else(|| MessageInput::Text(String::new()), Into::into)
    }
}

impl From<Vec<String>> for MessageInput {
    fn from(lines: Vec<String>) -> Self {
        MessageInput::Lines(lines)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The notification service.
//!
//! [`NotificationService`] is the single entry point through which any part
//! of an application shows a modal message. It composes the message text,
//! lets subscribers observe the request, finds the window that should own
//! the dialog, and marshals the display onto that window's UI thread.
//!
//! # Example
//!
//! ```
//! use message_service::dialog::{HeadlessDialogs, Outcome};
//! use message_service::message::{Failure, MessageInput};
//! use message_service::NotificationService;
//!
//! let service = NotificationService::builder()
//!     .backend(HeadlessDialogs::answering(Outcome::Yes))
//!     .build();
//!
//! service
//!     .show_warning([
//!         MessageInput::from("Could not reach the server."),
//!         Failure::new("timed out").into(),
//!     ])
//!     .expect("headless dialogs never fail");
//! assert!(service.ask_yes_no("Retry now?", None).expect("answered"));
//! assert_eq!(service.active_count(), 0);
//! ```

mod counter;
mod subscribers;

pub use counter::MessageCountGuard;
pub use subscribers::{MessageShowing, SubscriptionId};

use std::path::Path;
use std::sync::Arc;

use counter::ActiveCount;
use subscribers::Subscribers;

use crate::clipboard::{Clipboard, NoClipboard, SystemClipboard};
use crate::config::{Config, DEFAULT_VERBOSE_FAILURES};
use crate::dialog::{
    ButtonSet, DefaultButton, DialogBackend, DialogIcon, HeadlessDialogs, NativeDialogs,
    NotificationRequest, Outcome,
};
use crate::dispatch::{OwnerWindow, WindowRegistry};
use crate::error::{DialogError, MarshalError, Result};
use crate::i18n::{button_labels, I18n, Phrases};
use crate::message::{compose, Failure, MessageInput};

struct Shared {
    backend: Arc<dyn DialogBackend>,
    clipboard: Arc<dyn Clipboard>,
    windows: WindowRegistry,
    count: Arc<ActiveCount>,
    subscribers: Subscribers,
    phrases: Phrases,
    verbose_failures: bool,
    right_to_left: bool,
}

/// Shows modal notifications on behalf of any thread.
///
/// Cheap to clone; clones share the same counter, subscribers and windows.
#[derive(Clone)]
pub struct NotificationService {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("active_count", &self.active_count())
            .field("subscribers", &self.shared.subscribers.len())
            .field("windows", &self.shared.windows.len())
            .field("verbose_failures", &self.shared.verbose_failures)
            .field("right_to_left", &self.shared.right_to_left)
            .finish_non_exhaustive()
    }
}

/// Builder for [`NotificationService`].
///
/// Defaults to native dialogs, the system clipboard, English phrases,
/// left-to-right layout, and verbose failures in debug builds only.
pub struct ServiceBuilder {
    backend: Option<Arc<dyn DialogBackend>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    windows: WindowRegistry,
    phrases: Phrases,
    verbose_failures: bool,
    right_to_left: bool,
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self {
            backend: None,
            clipboard: None,
            windows: WindowRegistry::new(),
            phrases: Phrases::default(),
            verbose_failures: DEFAULT_VERBOSE_FAILURES,
            right_to_left: false,
        }
    }
}

impl ServiceBuilder {
    #[must_use]
    pub fn backend(mut self, backend: impl DialogBackend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Uses an already shared backend.
    #[must_use]
    pub fn shared_backend(mut self, backend: Arc<dyn DialogBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Arc::new(clipboard));
        self
    }

    /// Shares a window registry with the rest of the application.
    #[must_use]
    pub fn windows(mut self, windows: WindowRegistry) -> Self {
        self.windows = windows;
        self
    }

    #[must_use]
    pub fn phrases(mut self, phrases: Phrases) -> Self {
        self.phrases = phrases;
        self
    }

    #[must_use]
    pub fn verbose_failures(mut self, verbose: bool) -> Self {
        self.verbose_failures = verbose;
        self
    }

    #[must_use]
    pub fn right_to_left(mut self, right_to_left: bool) -> Self {
        self.right_to_left = right_to_left;
        self
    }

    /// Headless dialogs and no clipboard, unless already set.
    #[must_use]
    pub fn headless(mut self) -> Self {
        if self.backend.is_none() {
            self.backend = Some(Arc::new(HeadlessDialogs::new()));
        }
        if self.clipboard.is_none() {
            self.clipboard = Some(Arc::new(NoClipboard));
        }
        self
    }

    #[must_use]
    pub fn build(self) -> NotificationService {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(NativeDialogs::new()));
        let clipboard = self.clipboard.unwrap_or_else(|| Arc::new(SystemClipboard));

        NotificationService {
            shared: Arc::new(Shared {
                backend,
                clipboard,
                windows: self.windows,
                count: Arc::new(ActiveCount::default()),
                subscribers: Subscribers::default(),
                phrases: self.phrases,
                verbose_failures: self.verbose_failures,
                right_to_left: self.right_to_left,
            }),
        }
    }
}

impl NotificationService {
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Builds a service from configuration and the active locale.
    ///
    /// `headless` selects [`HeadlessDialogs`] and [`NoClipboard`]; otherwise
    /// native dialogs with localized button labels and the system clipboard
    /// are used.
    #[must_use]
    pub fn from_config(config: &Config, i18n: &I18n) -> Self {
        let mut phrases = Phrases::from_i18n(i18n);
        if let Some(product_name) = &config.product_name {
            phrases.product_name.clone_from(product_name);
        }

        let builder = Self::builder()
            .phrases(phrases)
            .verbose_failures(config.verbose_failures())
            .right_to_left(config.right_to_left.unwrap_or_else(|| i18n.is_right_to_left()));

        if config.headless() {
            tracing::info!("notifications run headless");
            builder.headless().build()
        } else {
            builder
                .backend(NativeDialogs::with_labels(button_labels(i18n)))
                .clipboard(SystemClipboard)
                .build()
        }
    }

    // ----------------------------------------------------------------------
    // Active count
    // ----------------------------------------------------------------------

    /// Number of notifications currently being shown.
    ///
    /// Background work can poll this to hold off while the user is being
    /// interrupted.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.shared.count.get()
    }

    /// Counts a dialog shown outside this service.
    ///
    /// Every call must be paired with exactly one
    /// [`external_decrement_message_count`](Self::external_decrement_message_count)
    /// by the caller. The service cannot detect a missing or extra call; an
    /// unpaired call skews the count seen by every other subsystem.
    pub fn external_increment_message_count(&self) {
        self.shared.count.increment();
    }

    /// Ends a dialog counted with
    /// [`external_increment_message_count`](Self::external_increment_message_count).
    pub fn external_decrement_message_count(&self) {
        self.shared.count.decrement();
    }

    /// Counts a dialog shown outside this service for as long as the
    /// returned guard lives.
    pub fn external_message_scope(&self) -> MessageCountGuard {
        MessageCountGuard::new(&self.shared.count)
    }

    // ----------------------------------------------------------------------
    // Subscriptions and collaborators
    // ----------------------------------------------------------------------

    /// Registers a callback run synchronously before every dialog.
    ///
    /// Callbacks observe; they cannot change or suppress the dialog.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&MessageShowing) + Send + Sync + 'static,
    {
        self.shared.subscribers.subscribe(Arc::new(callback))
    }

    /// Removes a callback. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.subscribers.unsubscribe(id)
    }

    /// Windows that may own dialogs; register them as they open.
    #[must_use]
    pub fn windows(&self) -> &WindowRegistry {
        &self.shared.windows
    }

    #[must_use]
    pub fn phrases(&self) -> &Phrases {
        &self.shared.phrases
    }

    #[must_use]
    pub fn verbose_failures(&self) -> bool {
        self.shared.verbose_failures
    }

    // ----------------------------------------------------------------------
    // Notifications
    // ----------------------------------------------------------------------

    /// Shows an informational message titled with the product name.
    pub fn show_info<I, T>(&self, inputs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        self.show_info_titled(None, inputs)
    }

    /// Shows an informational message with a custom title.
    pub fn show_info_titled<I, T>(&self, title: Option<&str>, inputs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        let _guard = self.enter();

        let title = self.title_or_default(title);
        let body = compose(inputs, self.shared.verbose_failures);
        self.display(NotificationRequest::new(title, body).icon(DialogIcon::Info))?;
        Ok(())
    }

    /// Shows a warning. Failures are rendered in full only when the service
    /// is configured with verbose failures.
    pub fn show_warning<I, T>(&self, inputs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        self.show_warning_with(inputs, self.shared.verbose_failures)
    }

    /// Shows a warning with every failure rendered in full.
    pub fn show_warning_detailed<I, T>(&self, inputs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        self.show_warning_with(inputs, true)
    }

    fn show_warning_with<I, T>(&self, inputs: I, verbose: bool) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        let _guard = self.enter();

        let title = self.shared.phrases.product_name.clone();
        let body = compose(inputs, verbose);
        self.display(NotificationRequest::new(title, body).icon(DialogIcon::Warning))?;
        Ok(())
    }

    /// Shows a fatal error.
    ///
    /// The full details are copied to the clipboard first. Clipboard
    /// failures never reach the caller and never prevent the dialog.
    pub fn show_fatal<I, T>(&self, inputs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<MessageInput>,
    {
        let _guard = self.enter();

        let inputs: Vec<MessageInput> = inputs.into_iter().map(Into::<MessageInput>::into).collect();
        let phrases = &self.shared.phrases;

        let summary = compose(inputs.iter().cloned(), false);
        let body = compose(
            [
                MessageInput::from(phrases.fatal_error_text.as_str()),
                MessageInput::from(phrases.error_in_clipboard.as_str()),
                MessageInput::Text(summary),
            ],
            false,
        );

        let details = compose(inputs, true);
        if let Err(err) = self.shared.clipboard.set_text(&details) {
            if cfg!(debug_assertions) {
                tracing::debug!(%err, "could not copy fatal error details to the clipboard");
            }
        }

        let request = NotificationRequest::new(phrases.fatal_title(), body)
            .icon(DialogIcon::Error);
        self.display(request)?;
        Ok(())
    }

    /// Asks a question with the given buttons and a question icon.
    pub fn ask(&self, text: &str, title: Option<&str>, buttons: ButtonSet) -> Result<Outcome> {
        let _guard = self.enter();

        let request = NotificationRequest::new(self.title_or_default(title), text)
            .buttons(buttons)
            .icon(DialogIcon::Question);
        self.display(request)
    }

    /// Asks a yes/no question defaulting to "yes" with a question icon.
    pub fn ask_yes_no(&self, text: &str, title: Option<&str>) -> Result<bool> {
        self.ask_yes_no_with(text, title, true, DialogIcon::Question)
    }

    /// Asks a yes/no question. Returns true only for "yes".
    pub fn ask_yes_no_with(
        &self,
        text: &str,
        title: Option<&str>,
        default_to_yes: bool,
        icon: DialogIcon,
    ) -> Result<bool> {
        let _guard = self.enter();

        let default_button = if default_to_yes {
            DefaultButton::First
        } else {
            DefaultButton::Second
        };
        let request = NotificationRequest::new(self.title_or_default(title), text)
            .buttons(ButtonSet::YesNo)
            .icon(icon)
            .default_button(default_button);

        Ok(self.display(request)? == Outcome::Yes)
    }

    // ----------------------------------------------------------------------
    // Load/save warnings
    // ----------------------------------------------------------------------

    /// Message shown when loading `path` failed.
    #[must_use]
    pub fn load_warning_message(&self, path: &Path, failure: &Failure, verbose: bool) -> String {
        compose(
            [
                MessageInput::Text(path.display().to_string()),
                MessageInput::from(self.shared.phrases.file_load_failed.as_str()),
                MessageInput::from(failure),
            ],
            verbose,
        )
    }

    /// Message shown when saving `path` failed.
    #[must_use]
    pub fn save_warning_message(
        &self,
        path: &Path,
        failure: &Failure,
        corruption_risk: bool,
    ) -> String {
        let phrases = &self.shared.phrases;
        compose(
            [
                MessageInput::Text(path.display().to_string()),
                MessageInput::from(phrases.file_save_failed.as_str()),
                MessageInput::from(failure),
                corruption_risk
                    .then(|| phrases.file_save_corruption_warning.as_str())
                    .into(),
            ],
            self.shared.verbose_failures,
        )
    }

    /// Warns that loading failed.
    ///
    /// `verbose` defaults to the service setting. A locked file shows only
    /// the failure's own message; without a path only the failure is shown.
    pub fn show_load_warning(
        &self,
        path: Option<&Path>,
        failure: &Failure,
        verbose: Option<bool>,
    ) -> Result<()> {
        let verbose = verbose.unwrap_or(self.shared.verbose_failures);

        if failure.is_file_locked() {
            return self.show_warning_with([failure.message()], verbose);
        }
        match path {
            Some(path) => {
                let message = self.load_warning_message(path, failure, verbose);
                self.show_warning_with([message], verbose)
            }
            None => self.show_warning_with([failure], verbose),
        }
    }

    /// Warns that saving failed, optionally adding the corruption warning.
    ///
    /// A locked file shows only the failure's own message; without a path
    /// only the failure is shown.
    pub fn show_save_warning(
        &self,
        path: Option<&Path>,
        failure: &Failure,
        corruption_risk: bool,
    ) -> Result<()> {
        if failure.is_file_locked() {
            return self.show_warning([failure.message()]);
        }
        match path {
            Some(path) => {
                let message = self.save_warning_message(path, failure, corruption_risk);
                self.show_warning([message])
            }
            None => self.show_warning([failure]),
        }
    }

    // ----------------------------------------------------------------------
    // Dispatch
    // ----------------------------------------------------------------------

    fn enter(&self) -> MessageCountGuard {
        MessageCountGuard::new(&self.shared.count)
    }

    fn title_or_default(&self, title: Option<&str>) -> String {
        title.map_or_else(|| self.shared.phrases.product_name.clone(), str::to_string)
    }

    /// Notifies subscribers, then shows `request` on the right thread.
    ///
    /// A failing backend is logged and returned to the caller in every build;
    /// it never trips a debug assertion.
    fn display(&self, request: NotificationRequest) -> Result<Outcome> {
        let request = request.right_to_left(self.shared.right_to_left);

        self.shared.subscribers.notify(&MessageShowing {
            title: request.title.clone(),
            text: request.body.clone(),
            buttons: request.buttons,
            icon: request.icon,
        });

        self.dispatch(&request).inspect_err(|err| {
            tracing::error!(%err, title = %request.title, "dialog could not be shown");
        })
    }

    fn dispatch(&self, request: &NotificationRequest) -> Result<Outcome> {
        let backend = &self.shared.backend;

        let Some(owner) = self.shared.windows.topmost() else {
            tracing::trace!("no open window; showing dialog without owner");
            return Ok(backend.show(None, request)?);
        };

        if owner.ui().is_current_thread() {
            return Ok(show_owned(backend.as_ref(), &owner, request)?);
        }

        let task_backend = Arc::clone(backend);
        let task_owner = owner.clone();
        let task_request = request.clone();
        let shown = owner
            .ui()
            .invoke(move || show_owned(task_backend.as_ref(), &task_owner, &task_request));

        match shown {
            Ok(result) => Ok(result?),
            Err(MarshalError::Disconnected) => {
                tracing::warn!(
                    window = owner.title(),
                    "UI loop is gone; showing dialog without owner"
                );
                Ok(backend.show(None, request)?)
            }
            // The task reached the UI thread and may already have shown the
            // dialog, so it must not be shown again here.
            Err(err @ MarshalError::NoReply) => Err(err.into()),
        }
    }
}

/// Shows `request` owned by `owner`, retrying once without an owner.
fn show_owned(
    backend: &dyn DialogBackend,
    owner: &OwnerWindow,
    request: &NotificationRequest,
) -> std::result::Result<Outcome, DialogError> {
    match backend.show(Some(owner), request) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            tracing::debug!(
                %err,
                window = owner.title(),
                "owned dialog failed; retrying without owner"
            );
            backend.show(None, request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records requests and answers from a script.
    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<NotificationRequest>>,
        answer: Option<Outcome>,
    }

    impl Recorder {
        fn answering(outcome: Outcome) -> Self {
            Self {
                answer: Some(outcome),
                ..Self::default()
            }
        }
    }

    impl DialogBackend for Arc<Recorder> {
        fn show(
            &self,
            _owner: Option<&OwnerWindow>,
            request: &NotificationRequest,
        ) -> std::result::Result<Outcome, DialogError> {
            self.requests.lock().expect("lock").push(request.clone());
            Ok(self
                .answer
                .unwrap_or_else(|| request.buttons.default_outcome(request.default_button)))
        }
    }

    fn service_with(recorder: &Arc<Recorder>) -> NotificationService {
        NotificationService::builder()
            .backend(Arc::clone(recorder))
            .clipboard(NoClipboard)
            .verbose_failures(false)
            .build()
    }

    fn last_request(recorder: &Recorder) -> NotificationRequest {
        recorder
            .requests
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("a dialog was shown")
    }

    #[test]
    fn info_uses_product_name_and_info_icon() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        service.show_info(["Done."]).expect("shown");

        let request = last_request(&recorder);
        assert_eq!(request.title, "Message Service");
        assert_eq!(request.body, "Done.");
        assert_eq!(request.icon, DialogIcon::Info);
        assert_eq!(request.buttons, ButtonSet::Ok);
    }

    #[test]
    fn info_titled_overrides_title() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        service.show_info_titled(Some("Export"), ["Done."]).expect("shown");
        assert_eq!(last_request(&recorder).title, "Export");
    }

    #[test]
    fn warning_verbosity_follows_setting() {
        let recorder = Arc::new(Recorder::default());
        let failure = Failure::new("top").with_cause("root");

        service_with(&recorder).show_warning([&failure]).expect("shown");
        assert_eq!(last_request(&recorder).body, "top");

        service_with(&recorder)
            .show_warning_detailed([&failure])
            .expect("shown");
        assert_eq!(last_request(&recorder).body, "top\nroot");
    }

    #[test]
    fn ask_uses_question_icon_and_given_buttons() {
        let recorder = Arc::new(Recorder::answering(Outcome::Retry));
        let service = service_with(&recorder);

        let outcome = service
            .ask("Try again?", Some("Network"), ButtonSet::RetryCancel)
            .expect("answered");

        assert_eq!(outcome, Outcome::Retry);
        let request = last_request(&recorder);
        assert_eq!(request.icon, DialogIcon::Question);
        assert_eq!(request.buttons, ButtonSet::RetryCancel);
        assert_eq!(request.title, "Network");
    }

    #[test]
    fn ask_yes_no_default_sets_default_button() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        assert!(service.ask_yes_no("Proceed?", None).expect("answered"));
        assert_eq!(last_request(&recorder).default_button, DefaultButton::First);

        assert!(!service
            .ask_yes_no_with("Proceed?", None, false, DialogIcon::Warning)
            .expect("answered"));
        let request = last_request(&recorder);
        assert_eq!(request.default_button, DefaultButton::Second);
        assert_eq!(request.icon, DialogIcon::Warning);
    }

    #[test]
    fn right_to_left_setting_reaches_requests() {
        let recorder = Arc::new(Recorder::default());
        let service = NotificationService::builder()
            .backend(Arc::clone(&recorder))
            .clipboard(NoClipboard)
            .right_to_left(true)
            .build();

        service.show_info(["x"]).expect("shown");
        assert!(last_request(&recorder).right_to_left);
    }

    #[test]
    fn load_warning_message_joins_path_phrase_and_failure() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        let message = service.load_warning_message(
            Path::new("/tmp/db.kdbx"),
            &Failure::new("bad header").with_cause("eof"),
            true,
        );
        assert_eq!(
            message,
            "/tmp/db.kdbx\n\nThe file could not be loaded.\n\nbad header\neof"
        );
    }

    #[test]
    fn load_warning_without_path_shows_only_the_failure() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        service
            .show_load_warning(None, &Failure::new("unreachable"), None)
            .expect("shown");
        assert_eq!(last_request(&recorder).body, "unreachable");
    }

    #[test]
    fn locked_load_failure_is_shown_verbatim() {
        let recorder = Arc::new(Recorder::default());
        let service = service_with(&recorder);

        service
            .show_load_warning(
                Some(Path::new("/tmp/db.kdbx")),
                &Failure::file_locked("The file is locked by another user."),
                Some(true),
            )
            .expect("shown");
        assert_eq!(
            last_request(&recorder).body,
            "The file is locked by another user."
        );
    }

    #[test]
    fn from_config_headless_answers_without_display() {
        let config = Config {
            headless: Some(true),
            product_name: Some("Vault".into()),
            right_to_left: Some(true),
            ..Config::default()
        };
        let i18n = I18n::new(Some("en-US".into()), &config);
        let service = NotificationService::from_config(&config, &i18n);

        assert_eq!(service.phrases().product_name, "Vault");
        assert!(service.ask_yes_no("Proceed?", None).expect("headless answer"));
        assert_eq!(service.active_count(), 0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Fixed phrases the notification service puts into dialogs.

use super::I18n;
use crate::dialog::ButtonLabels;

/// Localized strings resolved once when the service is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases {
    pub product_name: String,
    pub fatal_error: String,
    pub fatal_error_text: String,
    pub error_in_clipboard: String,
    pub file_load_failed: String,
    pub file_save_failed: String,
    pub file_save_corruption_warning: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            product_name: "Message Service".to_string(),
            fatal_error: "Fatal Error".to_string(),
            fatal_error_text: "A fatal error has occurred!".to_string(),
            error_in_clipboard: "The error details have been copied to the clipboard."
                .to_string(),
            file_load_failed: "The file could not be loaded.".to_string(),
            file_save_failed: "The file could not be saved.".to_string(),
            file_save_corruption_warning:
                "The data might be corrupted. Keep a backup of the last working file."
                    .to_string(),
        }
    }
}

impl Phrases {
    /// Resolves every phrase in the current locale of `i18n`.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            product_name: i18n.tr("product-name"),
            fatal_error: i18n.tr("fatal-error"),
            fatal_error_text: i18n.tr("fatal-error-text"),
            error_in_clipboard: i18n.tr("error-in-clipboard"),
            file_load_failed: i18n.tr("file-load-failed"),
            file_save_failed: i18n.tr("file-save-failed"),
            file_save_corruption_warning: i18n.tr("file-save-corruption-warning"),
        }
    }

    /// Title of fatal-error dialogs: `"<product> - <Fatal Error>"`.
    #[must_use]
    pub fn fatal_title(&self) -> String {
        format!("{} - {}", self.product_name, self.fatal_error)
    }
}

/// Resolves custom button labels in the current locale of `i18n`.
#[must_use]
pub fn button_labels(i18n: &I18n) -> ButtonLabels {
    ButtonLabels {
        abort: i18n.tr("button-abort"),
        retry: i18n.tr("button-retry"),
        ignore: i18n.tr("button-ignore"),
        cancel: i18n.tr("button-cancel"),
        try_again: i18n.tr("button-try-again"),
        continue_: i18n.tr("button-continue"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn english_phrases_match_defaults() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(Phrases::from_i18n(&i18n), Phrases::default());
    }

    #[test]
    fn every_locale_defines_every_phrase() {
        let i18n = I18n::default();
        for locale in i18n.available_locales.clone() {
            let mut i18n = I18n::default();
            i18n.set_locale(locale.clone());

            let phrases = Phrases::from_i18n(&i18n);
            let labels = button_labels(&i18n);
            let all = [
                &phrases.product_name,
                &phrases.fatal_error,
                &phrases.fatal_error_text,
                &phrases.error_in_clipboard,
                &phrases.file_load_failed,
                &phrases.file_save_failed,
                &phrases.file_save_corruption_warning,
                &labels.abort,
                &labels.retry,
                &labels.ignore,
                &labels.cancel,
                &labels.try_again,
                &labels.continue_,
            ];
            for text in all {
                assert!(!text.starts_with("MISSING"), "{locale}: {text}");
            }
        }
    }

    #[test]
    fn english_button_labels_match_native_defaults() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(button_labels(&i18n), ButtonLabels::default());
    }

    #[test]
    fn fatal_title_joins_product_and_error() {
        assert_eq!(
            Phrases::default().fatal_title(),
            "Message Service - Fatal Error"
        );
    }
}

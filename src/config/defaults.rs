// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "MessageService";

/// File name of the settings file.
pub const CONFIG_FILE: &str = "settings.toml";

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Whether warnings show full failure chains by default.
///
/// Debug builds show them, release builds only show the top-level message.
pub const DEFAULT_VERBOSE_FAILURES: bool = cfg!(debug_assertions);

/// Whether the service runs without a display by default.
pub const DEFAULT_HEADLESS: bool = false;

/// Languages written right-to-left (ISO 639 language subtags).
pub const RIGHT_TO_LEFT_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "ha", "he", "khw", "ks", "ps", "sd", "ug", "ur", "yi",
];

const _: () = {
    assert!(!APP_NAME.is_empty());
    assert!(!RIGHT_TO_LEFT_LANGUAGES.is_empty());
};

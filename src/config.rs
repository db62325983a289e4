/// Local-storage key for the visitor's language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "preferredLanguage";

/// Default lifetime of a toast notification before it auto-dismisses.
pub const NOTIFICATION_LIFETIME_MS: u32 = 4000;

/// Duration of the notification exit transition.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Duration of the modal closing transition.
pub const MODAL_CLOSE_MS: u32 = 250;

/// Delay before focusing the first field, so focus does not race the
/// opening transition.
pub const MODAL_FOCUS_DELAY_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn submit_delay_ms() -> u32 {
    600 // Short delay when running locally
}

#[cfg(not(debug_assertions))]
pub fn submit_delay_ms() -> u32 {
    1800
}

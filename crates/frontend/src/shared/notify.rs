//! Blocking user notices.
//!
//! Views talk to the user through [`Notifier`] so controllers can be driven
//! without a browser window.

/// Blocking notice and confirmation channel
pub trait Notifier {
    /// Show a message the user has to acknowledge
    fn alert(&self, message: &str);

    /// Ask the user to confirm a destructive action
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if let Err(e) = win.alert_with_message(message) {
                    log::error!("alert failed: {:?}", e);
                }
            }
            None => log::warn!("no window, notice dropped: {}", message),
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .map(|win| win.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
}

/// Bring the form back into view on small screens
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

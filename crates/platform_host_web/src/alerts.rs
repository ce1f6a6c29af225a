//! Blocking alert adapter backed by `window.alert`.

use platform_host::AlertService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser alert adapter.
pub struct WebAlertService;

impl AlertService for WebAlertService {
    fn alert(&self, message: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            return window
                .alert_with_message(message)
                .map_err(|err| format!("alert failed: {err:?}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            Err(crate::unsupported("window alerts"))
        }
    }
}

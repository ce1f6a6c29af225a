use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{
    WebAlertService, WebClipboardService, WebFormSubmitter, WebStorageUsageService,
    WebUploadInputService,
};

/// Returns the host strategy used by [`build_host_services`].
pub const fn selected_host_strategy() -> HostStrategy {
    HostStrategy::Browser
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the browser host-service bundle consumed by the page runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        storage_usage: Rc::new(WebStorageUsageService),
        clipboard: Rc::new(WebClipboardService),
        forms: Rc::new(WebFormSubmitter),
        alerts: Rc::new(WebAlertService),
        upload_input: Rc::new(WebUploadInputService::default()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_bundle_reports_browser_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
    }
}

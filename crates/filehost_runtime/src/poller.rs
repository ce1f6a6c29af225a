//! Periodic storage-usage polling.

use std::{cell::RefCell, time::Duration};

use leptos::{
    leptos_dom::helpers::IntervalHandle, logging, set_interval_with_handle, spawn_local, Callable,
    Callback,
};
use platform_host::{unix_time_ms_now, StorageUsageService};

use crate::{host::PageHostContext, reducer::PageAction};

/// Fetches storage usage once and maps the outcome to a reducer action.
///
/// Failures are logged here; the returned action only marks the indicator stale.
pub async fn poll_storage_once(service: &dyn StorageUsageService, path: &str) -> PageAction {
    match service.fetch_storage_info(path).await {
        Ok(info) => PageAction::StorageUsageLoaded {
            info,
            loaded_at_ms: unix_time_ms_now(),
        },
        Err(error) => {
            logging::warn!("storage usage poll failed: {error}");
            PageAction::StoragePollFailed { error }
        }
    }
}

#[derive(Default)]
/// Owned handle to the storage poll interval.
///
/// A failed poll never clears the interval; only [`StoragePoller::stop`] does.
pub struct StoragePoller {
    interval: RefCell<Option<IntervalHandle>>,
}

impl StoragePoller {
    /// Starts polling `path` every `period`, replacing any running interval.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser refuses to register the interval.
    pub fn start(
        &self,
        host: PageHostContext,
        path: String,
        period: Duration,
        dispatch: Callback<PageAction>,
    ) -> Result<(), String> {
        self.stop();
        let handle = set_interval_with_handle(
            move || {
                let service = host.storage_usage_service();
                let path = path.clone();
                spawn_local(async move {
                    dispatch.call(poll_storage_once(service.as_ref(), &path).await);
                });
            },
            period,
        )
        .map_err(|err| format!("failed to start storage polling: {err:?}"))?;
        *self.interval.borrow_mut() = Some(handle);
        Ok(())
    }

    /// Clears the interval. Calling it while stopped is a no-op.
    pub fn stop(&self) {
        if let Some(handle) = self.interval.borrow_mut().take() {
            handle.clear();
        }
    }
}

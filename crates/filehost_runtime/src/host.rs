//! Host-side execution of reducer effects.
//!
//! Effects that complete synchronously (alerts, form posts, file-input sync) run inline against
//! the injected [`HostServices`]. Timers and clipboard writes re-enter the reducer through the
//! runtime dispatch callback.

use std::{rc::Rc, time::Duration};

use leptos::{logging, set_timeout, spawn_local, Callable, Callback};
use platform_host::{ClipboardService, HostServices, StorageUsageService};

use crate::{
    model::{StagedFileId, ToastSeverity},
    reducer::{PageAction, PageEffect, LINK_COPIED_MESSAGE},
};

#[derive(Clone)]
/// Host service bundle for page runtime side effects.
pub struct PageHostContext {
    services: HostServices,
}

impl PageHostContext {
    /// Wraps an injected host bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured storage-usage client.
    pub fn storage_usage_service(&self) -> Rc<dyn StorageUsageService> {
        self.services.storage_usage.clone()
    }

    /// Returns the configured clipboard writer.
    pub fn clipboard_service(&self) -> Rc<dyn ClipboardService> {
        self.services.clipboard.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`PageEffect`] emitted by the reducer.
    pub fn run_page_effect(&self, effect: PageEffect, dispatch: Callback<PageAction>) {
        match effect {
            PageEffect::SyncUploadInput { keep } => self.sync_upload_input(&keep),
            PageEffect::OpenFilePicker => {
                report("open file picker", self.services.upload_input.open_picker())
            }
            PageEffect::Alert { message } => {
                report("alert", self.services.alerts.alert(&message))
            }
            PageEffect::SubmitForm(form) => {
                report("form submission", self.services.forms.submit(&form))
            }
            PageEffect::ScheduleToastDismiss { toast_id, after_ms } => set_timeout(
                move || dispatch.call(PageAction::DismissToast { toast_id }),
                Duration::from_millis(u64::from(after_ms)),
            ),
            PageEffect::WriteClipboard { text } => {
                let clipboard = self.clipboard_service();
                spawn_local(async move {
                    if let Some(action) = copy_with_confirmation(clipboard.as_ref(), &text).await {
                        dispatch.call(action);
                    }
                });
            }
        }
    }

    fn sync_upload_input(&self, keep: &[StagedFileId]) {
        let ids: Vec<u64> = keep.iter().map(|id| id.0).collect();
        report(
            "upload input sync",
            self.services.upload_input.retain_files(&ids),
        );
    }
}

fn report(operation: &str, result: Result<(), String>) {
    if let Err(err) = result {
        logging::warn!("{operation} failed: {err}");
    }
}

/// Writes `text` and returns the confirmation toast action, or logs and returns `None`.
pub async fn copy_with_confirmation(
    clipboard: &dyn ClipboardService,
    text: &str,
) -> Option<PageAction> {
    match clipboard.write_text(text).await {
        Ok(()) => Some(PageAction::ShowToast {
            message: LINK_COPIED_MESSAGE.to_string(),
            severity: ToastSeverity::Success,
        }),
        Err(err) => {
            logging::warn!("copy to clipboard failed: {err}");
            None
        }
    }
}

/// Absolute download URL for a relative `href`, resolved against the page origin.
pub fn absolute_url(href: &str) -> String {
    format!("{}{href}", page_origin())
}

fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        return web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use leptos::create_runtime;
    use platform_host::{
        FormSubmission, MemoryAlertService, MemoryClipboardService, MemoryFormSubmitter,
        MemoryUploadInputService, NoopClipboardService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sync_effects_reach_host_services() {
        let runtime = create_runtime();
        let forms = MemoryFormSubmitter::default();
        let alerts = MemoryAlertService::default();
        let upload_input = MemoryUploadInputService::default();
        let host = PageHostContext::new(HostServices {
            forms: Rc::new(forms.clone()),
            alerts: Rc::new(alerts.clone()),
            upload_input: Rc::new(upload_input.clone()),
            ..HostServices::headless()
        });
        let dispatch = Callback::new(|_: PageAction| {});

        host.run_page_effect(
            PageEffect::SubmitForm(FormSubmission::post("/delete/42")),
            dispatch,
        );
        host.run_page_effect(
            PageEffect::Alert {
                message: "pick something".to_string(),
            },
            dispatch,
        );
        host.run_page_effect(
            PageEffect::SyncUploadInput {
                keep: vec![StagedFileId(1), StagedFileId(3)],
            },
            dispatch,
        );
        host.run_page_effect(PageEffect::OpenFilePicker, dispatch);

        assert_eq!(forms.submissions(), vec![FormSubmission::post("/delete/42")]);
        assert_eq!(alerts.shown(), vec!["pick something".to_string()]);
        assert_eq!(upload_input.retained(), Some(vec![1, 3]));
        assert_eq!(upload_input.picker_open_count(), 1);
        assert_eq!(host.host_strategy_name(), "headless");

        runtime.dispose();
    }

    #[test]
    fn successful_copy_confirms_with_success_toast() {
        let clipboard = MemoryClipboardService::default();

        let action = block_on(copy_with_confirmation(&clipboard, "/download/7"));

        assert_eq!(clipboard.contents().as_deref(), Some("/download/7"));
        assert_eq!(
            action,
            Some(PageAction::ShowToast {
                message: LINK_COPIED_MESSAGE.to_string(),
                severity: ToastSeverity::Success,
            })
        );
    }

    #[test]
    fn failed_copy_is_not_surfaced() {
        assert_eq!(
            block_on(copy_with_confirmation(&NoopClipboardService, "x")),
            None
        );
    }

    #[test]
    fn native_absolute_url_keeps_relative_href() {
        assert_eq!(absolute_url("/download/1"), "/download/1");
    }
}

use system_ui::{TextTone, Toast, ToastRegion};

use super::*;
use crate::model::ToastSeverity;

fn severity_tone(severity: ToastSeverity) -> TextTone {
    match severity {
        ToastSeverity::Info => TextTone::Info,
        ToastSeverity::Success => TextTone::Success,
        ToastSeverity::Warning => TextTone::Warning,
        ToastSeverity::Danger => TextTone::Danger,
    }
}

#[component]
pub(super) fn ToastStack() -> impl IntoView {
    let runtime = use_page_runtime();
    let toasts = create_memo(move |_| runtime.state.with(|state| state.toasts.clone()));

    view! {
        <ToastRegion layout_class="filehost-toasts">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let toast_id = toast.id;
                    view! {
                        <Toast
                            tone=severity_tone(toast.severity)
                            on_dismiss=dispatch_callback(runtime, move || {
                                PageAction::DismissToast { toast_id }
                            })
                        >
                            {toast.message}
                        </Toast>
                    }
                }
            />
        </ToastRegion>
    }
}

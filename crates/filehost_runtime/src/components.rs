//! Page UI composition: upload staging, file listing, dialogs, notifications, storage usage.

mod dialogs;
mod listing;
mod storage;
mod toasts;
mod upload;

use leptos::*;

use self::{
    dialogs::{DeleteDialog, DownloadDialog},
    listing::FileListing,
    storage::StorageIndicator,
    toasts::ToastStack,
    upload::UploadPanel,
};
use crate::{
    model::PageState,
    reducer::PageAction,
    runtime_context::{use_page_runtime, PageRuntimeContext},
};

fn dispatch_callback<T: 'static>(
    runtime: PageRuntimeContext,
    action: impl Fn() -> PageAction + 'static,
) -> Callback<T> {
    Callback::new(move |_: T| runtime.dispatch_action(action()))
}

#[component]
/// Full file-hosting page. Must be rendered inside [`crate::PageProvider`].
pub fn FileHostPage() -> impl IntoView {
    let runtime = use_page_runtime();
    let show_upload = runtime
        .state
        .with_untracked(|state: &PageState| state.config.show_upload_form);

    view! {
        <div class="filehost-page" data-ui-kind="page">
            <header class="filehost-header">
                <h1 class="filehost-title">"File Host"</h1>
                <StorageIndicator />
            </header>
            {show_upload.then(|| view! { <UploadPanel /> })}
            <FileListing />
            <DownloadDialog />
            <DeleteDialog />
            <ToastStack />
        </div>
    }
}

use leptos::ev::{KeyboardEvent, SubmitEvent};
use platform_host::dom::{
    DELETE_FILENAME_ID, DELETE_FORM_ID, DELETE_MODAL_ID, DOWNLOAD_MODAL_ID, ZIP_NAME_INPUT_ID,
};
use system_ui::{Button, ButtonVariant, Modal, TextField};

use super::*;

#[component]
pub(super) fn DownloadDialog() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let default_zip_name = state.with_untracked(|state| state.config.default_zip_name.clone());
    let open = Signal::derive(move || state.with(|state| state.download_dialog.open));
    let zip_name =
        Signal::derive(move || state.with(|state| state.download_dialog.zip_name.clone()));
    let selected_count = move || state.with(|state| state.selected_ids().len());

    view! {
        <Modal
            id=DOWNLOAD_MODAL_ID
            title="Download selected files"
            open=open
            on_dismiss=dispatch_callback(runtime, || PageAction::CancelDownloadSelected)
        >
            <p class="modal-summary">
                {move || match selected_count() {
                    1 => "1 file selected".to_string(),
                    count => format!("{count} files selected"),
                }}
            </p>
            <label class="modal-label" for=ZIP_NAME_INPUT_ID>
                "Archive name"
            </label>
            <TextField
                id=ZIP_NAME_INPUT_ID
                placeholder=default_zip_name
                value=zip_name
                on_input=Callback::new(move |ev| {
                    runtime.dispatch_action(PageAction::SetZipName {
                        zip_name: event_target_value(&ev),
                    });
                })
                on_keydown=Callback::new(move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        runtime.dispatch_action(PageAction::ConfirmDownloadSelected);
                    }
                })
            />
            <div class="modal-actions">
                <Button on_click=dispatch_callback(runtime, || PageAction::CancelDownloadSelected)>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=dispatch_callback(runtime, || PageAction::ConfirmDownloadSelected)
                >
                    "Download ZIP"
                </Button>
            </div>
        </Modal>
    }
}

#[component]
pub(super) fn DeleteDialog() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let open = Signal::derive(move || state.with(PageState::delete_dialog_open));
    let file_name = move || {
        state.with(|state| {
            state
                .pending_delete
                .as_ref()
                .map(|target| target.file_name.clone())
                .unwrap_or_default()
        })
    };
    let form_action = move || state.with(|state| state.delete_form_action().unwrap_or_default());

    // The reducer consumes the pending target and emits the POST itself.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        runtime.dispatch_action(PageAction::ConfirmDelete);
    };

    view! {
        <Modal
            id=DELETE_MODAL_ID
            title="Delete file"
            open=open
            on_dismiss=dispatch_callback(runtime, || PageAction::CancelDelete)
        >
            <p class="modal-summary">
                "Are you sure you want to delete "
                <strong id=DELETE_FILENAME_ID>{file_name}</strong>
                "?"
            </p>
            <p class="modal-warning">"This action cannot be undone."</p>
            <form id=DELETE_FORM_ID method="post" action=form_action on:submit=on_submit>
                <div class="modal-actions">
                    <Button on_click=dispatch_callback(runtime, || PageAction::CancelDelete)>
                        "Cancel"
                    </Button>
                    <Button button_type="submit" variant=ButtonVariant::Danger>
                        "Delete"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

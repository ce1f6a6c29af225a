use leptos::ev::{DragEvent, SubmitEvent};
use platform_host::dom::{
    DROP_ZONE_ID, FILE_INPUT_ID, FILE_LIST_ID, SELECTED_FILES_ID, UPLOAD_BUTTON_ID,
};
use platform_host::StagedFileDescriptor;
use platform_host_web::{stage_dropped_files, stage_input_files};
use system_ui::{Button, ButtonSize, ButtonVariant, Surface, SurfaceVariant};

use super::*;
use crate::{model::StagedFile, size::format_file_size};

fn drop_zone_class(active: bool) -> &'static str {
    if active {
        "drop-zone dragover"
    } else {
        "drop-zone"
    }
}

fn staged_from(descriptors: Vec<StagedFileDescriptor>) -> Vec<StagedFile> {
    descriptors.into_iter().map(StagedFile::from).collect()
}

#[component]
pub(super) fn UploadPanel() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let upload_path = state.with_untracked(|state| state.config.upload_path.clone());

    let staged_files = create_memo(move |_| state.with(|state| state.staged.files().to_vec()));
    let list_visible = create_memo(move |_| state.with(PageState::staged_list_visible));
    let upload_enabled = create_memo(move |_| state.with(PageState::upload_enabled));
    let uploading = create_memo(move |_| state.with(|state| state.uploading));
    let drop_zone_active = create_memo(move |_| state.with(|state| state.drop_zone_active));

    let set_drop_zone_active = move |active: bool| {
        if drop_zone_active.get_untracked() != active {
            runtime.dispatch_action(PageAction::SetDropZoneActive { active });
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
            set_drop_zone_active(false);
            return;
        };
        match stage_dropped_files(&files, FILE_INPUT_ID) {
            Ok(descriptors) => runtime.dispatch_action(PageAction::StageFiles {
                files: staged_from(descriptors),
            }),
            Err(err) => {
                logging::warn!("staging dropped files failed: {err}");
                set_drop_zone_active(false);
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        runtime.dispatch_action(PageAction::StageFiles {
            files: staged_from(stage_input_files(&input)),
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        if !upload_enabled.get_untracked() {
            ev.prevent_default();
            return;
        }
        runtime.dispatch_action(PageAction::BeginUpload);
    };

    view! {
        <Surface layout_class="upload-panel" aria_label="Upload files">
            <form
                class="upload-form"
                method="post"
                action=upload_path
                enctype="multipart/form-data"
                on:submit=on_submit
            >
                <Surface variant=SurfaceVariant::Inset layout_class="drop-zone-surface">
                    <div
                        id=DROP_ZONE_ID
                        class=move || drop_zone_class(drop_zone_active.get())
                        role="button"
                        tabindex="0"
                        aria-controls=FILE_INPUT_ID
                        data-ui-kind="drop-zone"
                        on:click=move |_| runtime.dispatch_action(PageAction::OpenFilePicker)
                        on:keydown=move |ev| {
                            if matches!(ev.key().as_str(), "Enter" | " ") {
                                ev.prevent_default();
                                runtime.dispatch_action(PageAction::OpenFilePicker);
                            }
                        }
                        on:dragover=move |ev: DragEvent| {
                            ev.prevent_default();
                            set_drop_zone_active(true);
                        }
                        on:dragleave=move |ev: DragEvent| {
                            ev.prevent_default();
                            set_drop_zone_active(false);
                        }
                        on:drop=on_drop
                    >
                        <p class="drop-zone-title">"Drag and drop files here"</p>
                        <p class="drop-zone-hint">"or click to browse"</p>
                    </div>
                </Surface>
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    name="files"
                    multiple=true
                    hidden=true
                    on:change=on_input_change
                />
                <div id=FILE_LIST_ID class="staged-files" hidden=move || !list_visible.get()>
                    <h2 class="staged-files-title">"Selected files"</h2>
                    <ul id=SELECTED_FILES_ID class="staged-file-list">
                        <For
                            each=move || staged_files.get()
                            key=|file| file.id
                            children=move |file| {
                                let id = file.id;
                                let remove_label = format!("Remove {}", file.name);
                                view! {
                                    <li class="staged-file" data-staged-id=id.0>
                                        <div class="staged-file-info">
                                            <strong class="staged-file-name">{file.name}</strong>
                                            <small class="staged-file-size">
                                                {format_file_size(file.size_bytes)}
                                            </small>
                                        </div>
                                        <Button
                                            variant=ButtonVariant::Danger
                                            size=ButtonSize::Sm
                                            aria_label=remove_label
                                            on_click=dispatch_callback(runtime, move || {
                                                PageAction::RemoveStagedFile { id }
                                            })
                                        >
                                            "Remove"
                                        </Button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
                <Button
                    id=UPLOAD_BUTTON_ID
                    button_type="submit"
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || !upload_enabled.get())
                    busy=Signal::derive(move || uploading.get())
                >
                    {move || state.with(|state| state.upload_button_label())}
                </Button>
            </form>
        </Surface>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_zone_highlight_uses_dragover_class() {
        assert_eq!(drop_zone_class(true), "drop-zone dragover");
        assert_eq!(drop_zone_class(false), "drop-zone");
    }
}

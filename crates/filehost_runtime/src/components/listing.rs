use platform_host::dom::{
    DELETE_FILE_BUTTON_CLASS, DOWNLOAD_SELECTED_BUTTON_ID, FILE_CHECKBOX_CLASS,
};
use system_ui::{
    Badge, Button, ButtonSize, ButtonVariant, CheckboxField, DataTable, EmptyState, FieldVariant,
    Surface, TextField, TextTone,
};

use super::*;
use crate::{
    host::absolute_url,
    model::{FileKind, UploadedFile},
    size::format_file_size,
};

const LISTING_FILTERS: [(&str, &str); 3] =
    [("all", "All"), ("images", "Images"), ("videos", "Videos")];

fn kind_tone(kind: FileKind) -> TextTone {
    match kind {
        FileKind::Image => TextTone::Info,
        FileKind::Video => TextTone::Primary,
        FileKind::Other => TextTone::Secondary,
    }
}

#[component]
fn ListingToolbar() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let config = state.with_untracked(|state| state.config.clone());
    let download_enabled = create_memo(move |_| state.with(PageState::download_selected_enabled));
    let has_files = create_memo(move |_| state.with(|state| !state.files.is_empty()));

    view! {
        <div class="listing-toolbar" role="toolbar" aria-label="File actions">
            <form class="listing-search" method="get" action=config.search_path.clone()>
                <TextField
                    variant=FieldVariant::Inset
                    input_type="search"
                    name="q"
                    placeholder="Search files..."
                    aria_label="Search files"
                />
                <Button button_type="submit" size=ButtonSize::Sm>
                    "Search"
                </Button>
            </form>
            <nav class="listing-filters" aria-label="Filter files">
                {LISTING_FILTERS
                    .into_iter()
                    .map(|(filter, label)| {
                        view! {
                            <a class="listing-filter" href=config.filter_href(filter)>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="listing-bulk-actions">
                <Button
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || !has_files.get())
                    on_click=dispatch_callback(runtime, || PageAction::SelectAll)
                >
                    "Select all"
                </Button>
                <Button
                    size=ButtonSize::Sm
                    variant=ButtonVariant::Quiet
                    disabled=Signal::derive(move || !has_files.get())
                    on_click=dispatch_callback(runtime, || PageAction::ClearSelection)
                >
                    "Clear"
                </Button>
                <Button
                    id=DOWNLOAD_SELECTED_BUTTON_ID
                    size=ButtonSize::Sm
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || !download_enabled.get())
                    on_click=dispatch_callback(runtime, || PageAction::RequestDownloadSelected)
                >
                    "Download selected"
                </Button>
                <a
                    class="ui-button"
                    data-ui-kind="link-button"
                    href=config.download_all_path.clone()
                >
                    "Download all"
                </a>
            </div>
        </div>
    }
}

#[component]
fn FileRow(file: UploadedFile) -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let download_href =
        state.with_untracked(|state| state.config.download_href(file.id.as_str()));
    let copy_target = download_href.clone();

    let checked = {
        let id = file.id.clone();
        Signal::derive(move || {
            state.with(|state| state.files.get(&id).is_some_and(|entry| entry.checked))
        })
    };
    let on_checked = {
        let file_id = file.id.clone();
        Callback::new(move |ev: web_sys::Event| {
            runtime.dispatch_action(PageAction::SetFileChecked {
                file_id: file_id.clone(),
                checked: event_target_checked(&ev),
            });
        })
    };
    let on_delete = {
        let file_id = file.id.clone();
        let file_name = file.original_name.clone();
        move |_| {
            runtime.dispatch_action(PageAction::RequestDelete {
                file_id: file_id.clone(),
                file_name: file_name.clone(),
            });
        }
    };

    let kind = file.kind();
    let id = file.id.to_string();
    let name = file.original_name.clone();
    let select_label = format!("Select {name}");
    let size = format_file_size(file.file_size);
    let uploaded = file.display_upload_time().unwrap_or_default();
    let downloads = file.download_count;

    view! {
        <tr class="file-row" data-file-id=id.clone()>
            <td class="file-select">
                <CheckboxField
                    layout_class=FILE_CHECKBOX_CLASS
                    value=id.clone()
                    aria_label=select_label
                    checked=checked
                    on_change=on_checked
                />
            </td>
            <td class="file-name">{name.clone()}</td>
            <td class="file-size">{size}</td>
            <td class="file-kind">
                <Badge tone=kind_tone(kind)>{kind.label()}</Badge>
            </td>
            <td class="file-uploaded">{uploaded}</td>
            <td class="file-downloads">{downloads}</td>
            <td class="file-actions">
                <a class="ui-button" data-ui-kind="link-button" href=download_href>
                    "Download"
                </a>
                <Button
                    size=ButtonSize::Sm
                    variant=ButtonVariant::Quiet
                    on_click=dispatch_callback(runtime, move || PageAction::CopyToClipboard {
                        text: absolute_url(&copy_target),
                    })
                >
                    "Copy link"
                </Button>
                <button
                    type="button"
                    class=format!("ui-button {DELETE_FILE_BUTTON_CLASS}")
                    data-file-id=id
                    data-file-name=name
                    data-ui-kind="button"
                    data-ui-variant="danger"
                    data-ui-size="sm"
                    on:click=on_delete
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub(super) fn FileListing() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let files = create_memo(move |_| {
        state.with(|state| {
            state
                .files
                .entries()
                .iter()
                .map(|entry| entry.file.clone())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Surface layout_class="file-listing" aria_label="Uploaded files">
            <ListingToolbar />
            <Show
                when=move || !files.with(Vec::is_empty)
                fallback=|| view! { <EmptyState>"No files uploaded yet."</EmptyState> }
            >
                <DataTable aria_label="Uploaded files">
                    <thead>
                        <tr>
                            <th scope="col">
                                <span class="visually-hidden">"Select"</span>
                            </th>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Size"</th>
                            <th scope="col">"Type"</th>
                            <th scope="col">"Uploaded"</th>
                            <th scope="col">"Downloads"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || files.get()
                            key=|file| file.id.clone()
                            children=|file| view! { <FileRow file /> }
                        />
                    </tbody>
                </DataTable>
            </Show>
        </Surface>
    }
}

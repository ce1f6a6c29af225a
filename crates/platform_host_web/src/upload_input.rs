//! Upload form file-input adapter.
//!
//! Browsers expose chosen files only as an opaque `FileList`, so the adapter keeps the real
//! `File` handles in a thread-local registry keyed by the ids handed to the runtime. Removing a
//! staged file rebuilds the input's collection through a `DataTransfer` from that registry.

use platform_host::{dom::FILE_INPUT_ID, StagedFileDescriptor, UploadInputService};

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static STAGED_FILES: RefCell<Vec<(u64, web_sys::File)>> = const { RefCell::new(Vec::new()) };
    static NEXT_STAGED_ID: Cell<u64> = const { Cell::new(1) };
}

#[derive(Debug, Clone, Copy)]
/// Browser adapter for the upload form's `<input type="file" multiple>`.
pub struct WebUploadInputService {
    input_id: &'static str,
}

impl Default for WebUploadInputService {
    fn default() -> Self {
        Self {
            input_id: FILE_INPUT_ID,
        }
    }
}

impl WebUploadInputService {
    /// Creates an adapter bound to the input with DOM id `input_id`.
    pub const fn new(input_id: &'static str) -> Self {
        Self { input_id }
    }
}

impl UploadInputService for WebUploadInputService {
    fn open_picker(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            file_input(self.input_id)?.click();
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(crate::unsupported("file picker"))
        }
    }

    fn retain_files(&self, keep: &[u64]) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let files = STAGED_FILES.with(|staged| {
                let mut staged = staged.borrow_mut();
                staged.retain(|(id, _)| keep.contains(id));
                staged.sort_by_key(|(id, _)| keep.iter().position(|kept| kept == id));
                staged
                    .iter()
                    .map(|(_, file)| file.clone())
                    .collect::<Vec<_>>()
            });

            let transfer = web_sys::DataTransfer::new()
                .map_err(|err| format!("failed to create data transfer: {err:?}"))?;
            for file in &files {
                transfer
                    .items()
                    .add_with_file(file)
                    .map_err(|err| format!("failed to re-stage file: {err:?}"))?;
            }
            file_input(self.input_id)?.set_files(transfer.files().as_ref());
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = keep;
            Err(crate::unsupported("file input sync"))
        }
    }
}

/// Stages whatever the user picked in `input`, replacing the previous selection.
pub fn stage_input_files(input: &web_sys::HtmlInputElement) -> Vec<StagedFileDescriptor> {
    #[cfg(target_arch = "wasm32")]
    {
        return input
            .files()
            .map(|files| register_file_list(&files))
            .unwrap_or_else(|| register_files(Vec::new()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = input;
        Vec::new()
    }
}

/// Stages files dropped onto the drop zone and mirrors them into the upload input.
///
/// # Errors
///
/// Returns an error when the upload input is missing from the page.
pub fn stage_dropped_files(
    files: &web_sys::FileList,
    input_id: &str,
) -> Result<Vec<StagedFileDescriptor>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let input = file_input(input_id)?;
        input.set_files(Some(files));
        return Ok(register_file_list(files));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (files, input_id);
        Err(crate::unsupported("drag and drop staging"))
    }
}

#[cfg(target_arch = "wasm32")]
fn register_file_list(files: &web_sys::FileList) -> Vec<StagedFileDescriptor> {
    register_files((0..files.length()).filter_map(|index| files.get(index)).collect())
}

#[cfg(target_arch = "wasm32")]
fn register_files(files: Vec<web_sys::File>) -> Vec<StagedFileDescriptor> {
    let mut descriptors = Vec::with_capacity(files.len());
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let id = NEXT_STAGED_ID.with(|next| {
            let id = next.get();
            next.set(id.saturating_add(1));
            id
        });
        descriptors.push(StagedFileDescriptor::new(
            id,
            file.name(),
            file.size().max(0.0) as u64,
        ));
        entries.push((id, file));
    }
    STAGED_FILES.with(|staged| *staged.borrow_mut() = entries);
    descriptors
}

#[cfg(target_arch = "wasm32")]
fn file_input(input_id: &str) -> Result<web_sys::HtmlInputElement, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id))
        .ok_or_else(|| format!("upload input `#{input_id}` not found"))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| format!("`#{input_id}` is not an input element"))
}

//! Stable DOM ids and class names shared by the rendered page and the browser adapters.
//!
//! Server templates, stylesheets, and end-to-end tests target these names, so they are part of
//! the page contract and must not change.

/// Drag-and-drop target of the upload form.
pub const DROP_ZONE_ID: &str = "drop-zone";
/// Hidden multi-file input of the upload form.
pub const FILE_INPUT_ID: &str = "file-input";
/// Container of the staged-file list.
pub const FILE_LIST_ID: &str = "file-list";
/// List element holding one row per staged file.
pub const SELECTED_FILES_ID: &str = "selected-files";
/// Upload form submit button.
pub const UPLOAD_BUTTON_ID: &str = "upload-btn";
/// Bulk download button.
pub const DOWNLOAD_SELECTED_BUTTON_ID: &str = "download-selected-btn";
/// Archive-name field of the download dialog.
pub const ZIP_NAME_INPUT_ID: &str = "zip-name";
/// File-name slot of the delete dialog.
pub const DELETE_FILENAME_ID: &str = "delete-filename";
/// Confirmation form of the delete dialog.
pub const DELETE_FORM_ID: &str = "delete-form";
/// Download naming dialog.
pub const DOWNLOAD_MODAL_ID: &str = "downloadModal";
/// Delete confirmation dialog.
pub const DELETE_MODAL_ID: &str = "deleteModal";
/// Class of the per-file selection checkboxes.
pub const FILE_CHECKBOX_CLASS: &str = "file-checkbox";
/// Class of the per-file delete buttons.
pub const DELETE_FILE_BUTTON_CLASS: &str = "delete-file-btn";

/// Embedded JSON payload with page configuration overrides.
pub const CONFIG_PAYLOAD_ID: &str = "filehost-config";
/// Embedded JSON payload listing the uploaded files.
pub const FILES_PAYLOAD_ID: &str = "filehost-files";
/// Embedded JSON payload with the initial storage usage.
pub const STORAGE_PAYLOAD_ID: &str = "filehost-storage";

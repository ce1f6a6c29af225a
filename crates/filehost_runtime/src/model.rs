use platform_host::{FormSubmission, StagedFileDescriptor, StorageInfo};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StagedFileId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub id: StagedFileId,
    pub name: String,
    pub size_bytes: u64,
}

impl From<StagedFileDescriptor> for StagedFile {
    fn from(descriptor: StagedFileDescriptor) -> Self {
        Self {
            id: StagedFileId(descriptor.id),
            name: descriptor.name,
            size_bytes: descriptor.size_bytes,
        }
    }
}

/// Files chosen for upload but not yet submitted, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedFileList {
    files: Vec<StagedFile>,
}

impl StagedFileList {
    pub fn replace(&mut self, files: Vec<StagedFile>) {
        self.files = files;
    }

    pub fn remove(&mut self, id: StagedFileId) -> Option<StagedFile> {
        let index = self.files.iter().position(|file| file.id == id)?;
        Some(self.files.remove(index))
    }

    /// Positional removal for callers holding a snapshot that matches the current list.
    pub fn remove_at(&mut self, index: usize) -> Option<StagedFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn ids(&self) -> Vec<StagedFileId> {
        self.files.iter().map(|file| file.id).collect()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Server-assigned file identifier. Payloads may carry it as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileId(pub String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawFileId {
            Number(u64),
            Text(String),
        }

        Ok(match RawFileId::deserialize(deserializer)? {
            RawFileId::Number(id) => Self(id.to_string()),
            RawFileId::Text(id) => Self(id),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Other,
}

impl FileKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(kind) if kind.starts_with("image/") => Self::Image,
            Some(kind) if kind.starts_with("video/") => Self::Video,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Other => "File",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: FileId,
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_count: u64,
}

/// Nullable counters on the server side arrive as `null`; treat them as zero.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UploadedFile {
    pub fn kind(&self) -> FileKind {
        FileKind::from_content_type(self.content_type.as_deref())
    }

    /// Upload timestamp trimmed to minutes (`2024-05-01 09:30`).
    pub fn display_upload_time(&self) -> Option<String> {
        self.upload_time
            .as_deref()
            .map(|raw| raw.chars().take(16).collect::<String>().replacen('T', " ", 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableFile {
    pub file: UploadedFile,
    pub checked: bool,
}

/// Uploaded files shown with a selection checkbox, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectableFileSet {
    files: Vec<SelectableFile>,
}

impl SelectableFileSet {
    pub fn load(&mut self, files: Vec<UploadedFile>) {
        self.files = files
            .into_iter()
            .map(|file| SelectableFile {
                file,
                checked: false,
            })
            .collect();
    }

    /// Returns `false` when `id` is not in the set.
    pub fn set_checked(&mut self, id: &FileId, checked: bool) -> bool {
        match self.files.iter_mut().find(|entry| &entry.file.id == id) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        for entry in &mut self.files {
            entry.checked = checked;
        }
    }

    pub fn get(&self, id: &FileId) -> Option<&SelectableFile> {
        self.files.iter().find(|entry| &entry.file.id == id)
    }

    /// Checked ids in document order, computed on every call.
    pub fn selected_ids(&self) -> Vec<FileId> {
        self.files
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.file.id.clone())
            .collect()
    }

    pub fn any_checked(&self) -> bool {
        self.files.iter().any(|entry| entry.checked)
    }

    pub fn all_checked(&self) -> bool {
        !self.files.is_empty() && self.files.iter().all(|entry| entry.checked)
    }

    pub fn entries(&self) -> &[SelectableFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteTarget {
    pub file_id: FileId,
    pub file_name: String,
}

impl PendingDeleteTarget {
    pub fn form_action(&self, config: &PageConfig) -> String {
        config.delete_action(self.file_id.as_str())
    }
}

/// Bulk download request built right before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipRequest {
    pub file_ids: Vec<FileId>,
    pub zip_name: String,
}

impl ZipRequest {
    /// Deduplicates `file_ids` keeping first occurrences and falls back to `default_name` when
    /// `zip_name` is empty. Any other input is sent as typed.
    pub fn new(file_ids: Vec<FileId>, zip_name: &str, default_name: &str) -> Self {
        let mut unique = Vec::with_capacity(file_ids.len());
        for id in file_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self {
            file_ids: unique,
            zip_name: if zip_name.is_empty() {
                default_name.to_string()
            } else {
                zip_name.to_string()
            },
        }
    }

    /// One `selectedFiles` field per id followed by `zipName`.
    pub fn to_submission(&self, action: &str) -> FormSubmission {
        self.file_ids
            .iter()
            .fold(FormSubmission::post(action), |form, id| {
                form.with_field("selectedFiles", id.as_str())
            })
            .with_field("zipName", self.zip_name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: ToastSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLevel {
    Normal,
    Warning,
    Full,
}

impl StorageLevel {
    pub fn from_percentage(percentage: f64, warning_at: f64, full_at: f64) -> Self {
        if percentage >= full_at {
            Self::Full
        } else if percentage >= warning_at {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Full => "full",
        }
    }
}

/// Last known storage usage plus poll health.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageIndicator {
    pub info: Option<StorageInfo>,
    /// Set when the most recent poll failed; `info` keeps the last good payload.
    pub stale: bool,
    pub last_error: Option<String>,
    pub last_updated_ms: Option<u64>,
}

impl StorageIndicator {
    pub fn level(&self, config: &PageConfig) -> Option<StorageLevel> {
        self.info.as_ref().map(|info| {
            StorageLevel::from_percentage(
                info.usage_percentage,
                config.storage_warning_percent,
                config.storage_full_percent,
            )
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadDialogState {
    pub open: bool,
    pub zip_name: String,
}

/// Complete interaction state of the page. Every rendered flag derives from this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub config: PageConfig,
    pub staged: StagedFileList,
    pub drop_zone_active: bool,
    pub uploading: bool,
    pub files: SelectableFileSet,
    pub download_dialog: DownloadDialogState,
    pub pending_delete: Option<PendingDeleteTarget>,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
    pub storage: StorageIndicator,
}

impl PageState {
    pub fn with_config(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn staged_list_visible(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn upload_enabled(&self) -> bool {
        !self.staged.is_empty() && !self.uploading
    }

    pub fn upload_button_label(&self) -> &'static str {
        if self.uploading {
            "Uploading..."
        } else {
            "Upload Files"
        }
    }

    pub fn selected_ids(&self) -> Vec<FileId> {
        self.files.selected_ids()
    }

    pub fn download_selected_enabled(&self) -> bool {
        self.files.any_checked()
    }

    pub fn delete_dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn delete_form_action(&self) -> Option<String> {
        self.pending_delete
            .as_ref()
            .map(|target| target.form_action(&self.config))
    }

    pub fn storage_level(&self) -> Option<StorageLevel> {
        self.storage.level(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn staged(id: u64, name: &str) -> StagedFile {
        StagedFile {
            id: StagedFileId(id),
            name: name.to_string(),
            size_bytes: 10,
        }
    }

    #[test]
    fn staged_list_removes_by_identity_and_position() {
        let mut list = StagedFileList::default();
        list.replace(vec![staged(1, "a"), staged(2, "b"), staged(3, "c")]);

        assert_eq!(list.remove(StagedFileId(2)).map(|f| f.name), Some("b".to_string()));
        assert_eq!(list.ids(), vec![StagedFileId(1), StagedFileId(3)]);
        assert!(list.remove(StagedFileId(2)).is_none());
        assert!(list.remove_at(5).is_none());
        assert_eq!(list.remove_at(0).map(|f| f.id), Some(StagedFileId(1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn file_id_accepts_numbers_and_strings() {
        let files: Vec<UploadedFile> = serde_json::from_str(
            r#"[
                {"id": 42, "originalName": "report.pdf", "fileSize": 1536},
                {"id": "abc", "originalName": "cat.png", "contentType": "image/png"}
            ]"#,
        )
        .expect("parse files");

        assert_eq!(files[0].id, FileId::new("42"));
        assert_eq!(files[0].kind(), FileKind::Other);
        assert_eq!(files[1].id.as_str(), "abc");
        assert_eq!(files[1].kind(), FileKind::Image);
        assert_eq!(files[1].download_count, 0);
    }

    #[test]
    fn selection_is_reported_in_document_order() {
        let mut set = SelectableFileSet::default();
        set.load(
            ["3", "1", "2"]
                .into_iter()
                .map(|id| UploadedFile {
                    id: FileId::new(id),
                    original_name: format!("{id}.txt"),
                    file_size: 0,
                    content_type: None,
                    upload_time: None,
                    download_count: 0,
                })
                .collect(),
        );

        assert!(set.set_checked(&FileId::new("2"), true));
        assert!(set.set_checked(&FileId::new("3"), true));
        assert!(!set.set_checked(&FileId::new("9"), true));
        assert_eq!(set.selected_ids(), vec![FileId::new("3"), FileId::new("2")]);
        assert!(!set.all_checked());

        set.set_all(true);
        assert!(set.all_checked());
        set.set_all(false);
        assert!(!set.any_checked());
    }

    #[test]
    fn zip_request_dedupes_and_defaults_empty_names() {
        let request = ZipRequest::new(
            vec![FileId::new("x"), FileId::new("y"), FileId::new("x")],
            "",
            "selected_files",
        );
        assert_eq!(request.file_ids, vec![FileId::new("x"), FileId::new("y")]);
        assert_eq!(request.zip_name, "selected_files");
    }

    #[test]
    fn zip_request_sends_names_as_typed() {
        let named = ZipRequest::new(vec![FileId::new("x")], " my archive ", "selected_files");
        assert_eq!(named.zip_name, " my archive ");

        let form = named.to_submission("/download-zip");
        assert_eq!(
            form.fields.last(),
            Some(&("zipName".to_string(), " my archive ".to_string()))
        );
    }

    #[test]
    fn listing_entries_accept_null_counters() {
        let files: Vec<UploadedFile> = serde_json::from_str(
            r#"[
                {"id":1,"originalName":"a.txt","fileSize":10,"downloadCount":null},
                {"id":"2","originalName":"b.png","fileSize":null,"contentType":"image/png"}
            ]"#,
        )
        .expect("parse listing with null counters");

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_size, 10);
        assert_eq!(files[0].download_count, 0);
        assert_eq!(files[1].file_size, 0);
        assert_eq!(files[1].download_count, 0);
        assert_eq!(files[1].kind(), FileKind::Image);
    }

    #[test]
    fn storage_level_thresholds_are_inclusive() {
        assert_eq!(StorageLevel::from_percentage(79.9, 80.0, 95.0), StorageLevel::Normal);
        assert_eq!(StorageLevel::from_percentage(80.0, 80.0, 95.0), StorageLevel::Warning);
        assert_eq!(StorageLevel::from_percentage(95.0, 80.0, 95.0), StorageLevel::Full);
    }

    #[test]
    fn upload_time_is_trimmed_for_display() {
        let file = UploadedFile {
            id: FileId::new("1"),
            original_name: "a".to_string(),
            file_size: 0,
            content_type: Some("video/mp4".to_string()),
            upload_time: Some("2024-05-01T09:30:12.123".to_string()),
            download_count: 3,
        };
        assert_eq!(file.display_upload_time().as_deref(), Some("2024-05-01 09:30"));
        assert_eq!(file.kind().label(), "Video");
    }
}

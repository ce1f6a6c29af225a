//! Reducer actions, side-effect intents, and transition logic for the file-hosting page.

use platform_host::{FormSubmission, StorageInfo};
use thiserror::Error;

use crate::model::{
    FileId, PageState, PendingDeleteTarget, StagedFile, StagedFileId, Toast, ToastId,
    ToastSeverity, UploadedFile, ZipRequest,
};

/// Blocking alert shown when a bulk download is requested with nothing checked.
pub const EMPTY_SELECTION_ALERT: &str = "Please select at least one file to download.";
/// Toast shown after a successful clipboard write.
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_page`] to mutate [`PageState`].
pub enum PageAction {
    /// Open the native picker of the upload input.
    OpenFilePicker,
    /// Replace the staged list with newly chosen or dropped files.
    StageFiles {
        /// Files in selection order.
        files: Vec<StagedFile>,
    },
    /// Remove one staged file by identity.
    RemoveStagedFile {
        /// Staged file to remove.
        id: StagedFileId,
    },
    /// Remove one staged file by position in the current list.
    RemoveStagedFileAt {
        /// Zero-based row index.
        index: usize,
    },
    /// Toggle the drop zone's drag-over highlight.
    SetDropZoneActive {
        /// Whether a drag is hovering the zone.
        active: bool,
    },
    /// The upload form is being submitted natively.
    BeginUpload,
    /// Replace the uploaded-file listing.
    LoadListing {
        /// Files in document order.
        files: Vec<UploadedFile>,
    },
    /// Set one listing checkbox.
    SetFileChecked {
        /// File whose checkbox changed.
        file_id: FileId,
        /// New checked state.
        checked: bool,
    },
    /// Check every listed file.
    SelectAll,
    /// Uncheck every listed file.
    ClearSelection,
    /// Open the zip naming dialog, or alert when nothing is checked.
    RequestDownloadSelected,
    /// Update the zip-name field.
    SetZipName {
        /// Raw field text.
        zip_name: String,
    },
    /// Submit the bulk download form.
    ConfirmDownloadSelected,
    /// Close the zip naming dialog without submitting.
    CancelDownloadSelected,
    /// Open the delete confirmation for one file.
    RequestDelete {
        /// File to delete.
        file_id: FileId,
        /// Name shown in the dialog.
        file_name: String,
    },
    /// Close the delete confirmation.
    CancelDelete,
    /// Submit the delete form for the pending target.
    ConfirmDelete,
    /// Show a transient notification.
    ShowToast {
        /// Notification text.
        message: String,
        /// Visual severity.
        severity: ToastSeverity,
    },
    /// Remove a notification. Unknown ids are ignored.
    DismissToast {
        /// Notification to remove.
        toast_id: ToastId,
    },
    /// Copy text to the clipboard.
    CopyToClipboard {
        /// Text to copy.
        text: String,
    },
    /// A storage poll succeeded.
    StorageUsageLoaded {
        /// Fresh payload.
        info: StorageInfo,
        /// Wall-clock time of the response.
        loaded_at_ms: u64,
    },
    /// A storage poll failed.
    StoragePollFailed {
        /// Failure description.
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_page`] for the host to execute.
pub enum PageEffect {
    /// Rebuild the upload input so it holds exactly these staged files, in order.
    SyncUploadInput {
        /// Staged files that remain.
        keep: Vec<StagedFileId>,
    },
    /// Open the native file picker.
    OpenFilePicker,
    /// Show a blocking alert.
    Alert {
        /// Alert text.
        message: String,
    },
    /// Submit a transient HTML form.
    SubmitForm(FormSubmission),
    /// Dispatch [`PageAction::DismissToast`] after a delay.
    ScheduleToastDismiss {
        /// Notification to dismiss.
        toast_id: ToastId,
        /// Delay in milliseconds.
        after_ms: u32,
    },
    /// Write text to the clipboard and confirm with a toast.
    WriteClipboard {
        /// Text to copy.
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by [`reduce_page`]. State is left untouched when one is returned.
pub enum ReducerError {
    /// The staged file id is not in the staged list.
    #[error("staged file {0:?} not found")]
    StagedFileNotFound(StagedFileId),
    /// Positional removal past the end of the staged list.
    #[error("staged file index {index} out of range for {len} files")]
    StagedIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current staged list length.
        len: usize,
    },
    /// The file id is not in the listing.
    #[error("listed file `{0}` not found")]
    FileNotFound(FileId),
    /// Upload submitted with nothing staged.
    #[error("no files staged for upload")]
    NothingStaged,
    /// Delete confirmed without a pending target.
    #[error("no delete pending")]
    NoPendingDelete,
}

/// Applies a [`PageAction`] to the page state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references a staged file, listed file, or delete
/// target that does not exist. Toast dismissal never errors.
pub fn reduce_page(
    state: &mut PageState,
    action: PageAction,
) -> Result<Vec<PageEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        PageAction::OpenFilePicker => effects.push(PageEffect::OpenFilePicker),
        PageAction::StageFiles { files } => {
            state.staged.replace(files);
            state.drop_zone_active = false;
            state.uploading = false;
        }
        PageAction::RemoveStagedFile { id } => {
            state
                .staged
                .remove(id)
                .ok_or(ReducerError::StagedFileNotFound(id))?;
            effects.push(PageEffect::SyncUploadInput {
                keep: state.staged.ids(),
            });
        }
        PageAction::RemoveStagedFileAt { index } => {
            let len = state.staged.len();
            state
                .staged
                .remove_at(index)
                .ok_or(ReducerError::StagedIndexOutOfRange { index, len })?;
            effects.push(PageEffect::SyncUploadInput {
                keep: state.staged.ids(),
            });
        }
        PageAction::SetDropZoneActive { active } => state.drop_zone_active = active,
        PageAction::BeginUpload => {
            if state.staged.is_empty() {
                return Err(ReducerError::NothingStaged);
            }
            state.uploading = true;
        }
        PageAction::LoadListing { files } => {
            state.files.load(files);
        }
        PageAction::SetFileChecked { file_id, checked } => {
            if !state.files.set_checked(&file_id, checked) {
                return Err(ReducerError::FileNotFound(file_id));
            }
        }
        PageAction::SelectAll => state.files.set_all(true),
        PageAction::ClearSelection => state.files.set_all(false),
        PageAction::RequestDownloadSelected => {
            if state.files.any_checked() {
                state.download_dialog.open = true;
            } else {
                effects.push(empty_selection_alert());
            }
        }
        PageAction::SetZipName { zip_name } => state.download_dialog.zip_name = zip_name,
        PageAction::ConfirmDownloadSelected => {
            let selected = state.selected_ids();
            if selected.is_empty() {
                effects.push(empty_selection_alert());
            } else {
                let request = ZipRequest::new(
                    selected,
                    &state.download_dialog.zip_name,
                    &state.config.default_zip_name,
                );
                effects.push(PageEffect::SubmitForm(
                    request.to_submission(&state.config.download_zip_path),
                ));
                state.download_dialog.open = false;
            }
        }
        PageAction::CancelDownloadSelected => state.download_dialog.open = false,
        PageAction::RequestDelete { file_id, file_name } => {
            state.pending_delete = Some(PendingDeleteTarget { file_id, file_name });
        }
        PageAction::CancelDelete => state.pending_delete = None,
        PageAction::ConfirmDelete => {
            let target = state
                .pending_delete
                .take()
                .ok_or(ReducerError::NoPendingDelete)?;
            effects.push(PageEffect::SubmitForm(FormSubmission::post(
                target.form_action(&state.config),
            )));
        }
        PageAction::ShowToast { message, severity } => {
            state.next_toast_id = state.next_toast_id.saturating_add(1);
            let toast_id = ToastId(state.next_toast_id);
            state.toasts.push(Toast {
                id: toast_id,
                message,
                severity,
            });
            effects.push(PageEffect::ScheduleToastDismiss {
                toast_id,
                after_ms: state.config.toast_dismiss_ms,
            });
        }
        PageAction::DismissToast { toast_id } => {
            state.toasts.retain(|toast| toast.id != toast_id);
        }
        PageAction::CopyToClipboard { text } => effects.push(PageEffect::WriteClipboard { text }),
        PageAction::StorageUsageLoaded { info, loaded_at_ms } => {
            state.storage.info = Some(info);
            state.storage.stale = false;
            state.storage.last_error = None;
            state.storage.last_updated_ms = Some(loaded_at_ms);
        }
        PageAction::StoragePollFailed { error } => {
            state.storage.stale = true;
            state.storage.last_error = Some(error);
        }
    }

    Ok(effects)
}

fn empty_selection_alert() -> PageEffect {
    PageEffect::Alert {
        message: EMPTY_SELECTION_ALERT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::StorageLevel;

    fn staged(id: u64, name: &str) -> StagedFile {
        StagedFile {
            id: StagedFileId(id),
            name: name.to_string(),
            size_bytes: 1024,
        }
    }

    fn listed(id: &str) -> UploadedFile {
        UploadedFile {
            id: FileId::new(id),
            original_name: format!("{id}.bin"),
            file_size: 2048,
            content_type: None,
            upload_time: None,
            download_count: 0,
        }
    }

    fn state_with_listing(ids: &[&str]) -> PageState {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::LoadListing {
                files: ids.iter().map(|id| listed(id)).collect(),
            },
        )
        .expect("load listing");
        state
    }

    fn check(state: &mut PageState, id: &str) {
        reduce_page(
            state,
            PageAction::SetFileChecked {
                file_id: FileId::new(id),
                checked: true,
            },
        )
        .expect("check file");
    }

    #[test]
    fn download_request_with_nothing_checked_alerts_and_keeps_dialog_closed() {
        let mut state = state_with_listing(&["1", "2"]);

        let effects =
            reduce_page(&mut state, PageAction::RequestDownloadSelected).expect("request");

        assert!(!state.download_dialog.open);
        assert_eq!(
            effects,
            vec![PageEffect::Alert {
                message: EMPTY_SELECTION_ALERT.to_string()
            }]
        );
        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, PageEffect::SubmitForm(_))));
    }

    #[test]
    fn download_request_with_selection_opens_dialog() {
        let mut state = state_with_listing(&["1", "2"]);
        check(&mut state, "2");

        let effects =
            reduce_page(&mut state, PageAction::RequestDownloadSelected).expect("request");

        assert!(effects.is_empty());
        assert!(state.download_dialog.open);
        assert!(state.download_selected_enabled());
    }

    #[test]
    fn removing_middle_staged_file_keeps_order_and_submit_enabled() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::StageFiles {
                files: vec![staged(1, "A"), staged(2, "B"), staged(3, "C")],
            },
        )
        .expect("stage");

        let effects = reduce_page(
            &mut state,
            PageAction::RemoveStagedFile {
                id: StagedFileId(2),
            },
        )
        .expect("remove");

        let names: Vec<_> = state.staged.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(state.upload_enabled());
        assert!(state.staged_list_visible());
        assert_eq!(
            effects,
            vec![PageEffect::SyncUploadInput {
                keep: vec![StagedFileId(1), StagedFileId(3)]
            }]
        );

        reduce_page(&mut state, PageAction::RemoveStagedFileAt { index: 1 }).expect("remove C");
        assert!(state.upload_enabled());
        reduce_page(&mut state, PageAction::RemoveStagedFileAt { index: 0 }).expect("remove A");
        assert!(!state.upload_enabled());
        assert!(!state.staged_list_visible());
    }

    #[test]
    fn unknown_staged_file_is_rejected_without_state_change() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::StageFiles {
                files: vec![staged(7, "A")],
            },
        )
        .expect("stage");
        let before = state.clone();

        assert_eq!(
            reduce_page(
                &mut state,
                PageAction::RemoveStagedFile {
                    id: StagedFileId(8)
                }
            ),
            Err(ReducerError::StagedFileNotFound(StagedFileId(8)))
        );
        assert_eq!(
            reduce_page(&mut state, PageAction::RemoveStagedFileAt { index: 3 }),
            Err(ReducerError::StagedIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn staging_replaces_list_and_clears_drop_highlight() {
        let mut state = PageState::default();
        reduce_page(&mut state, PageAction::SetDropZoneActive { active: true }).expect("drag");
        assert!(state.drop_zone_active);

        reduce_page(
            &mut state,
            PageAction::StageFiles {
                files: vec![staged(1, "old")],
            },
        )
        .expect("stage");
        reduce_page(
            &mut state,
            PageAction::StageFiles {
                files: vec![staged(2, "new")],
            },
        )
        .expect("restage");

        assert_eq!(state.staged.ids(), vec![StagedFileId(2)]);
        assert!(!state.drop_zone_active);
    }

    #[test]
    fn confirm_download_submits_each_id_and_default_zip_name() {
        let mut state = state_with_listing(&["x", "z", "y"]);
        check(&mut state, "x");
        check(&mut state, "y");
        reduce_page(&mut state, PageAction::RequestDownloadSelected).expect("open");
        reduce_page(
            &mut state,
            PageAction::SetZipName {
                zip_name: String::new(),
            },
        )
        .expect("zip name");

        let effects =
            reduce_page(&mut state, PageAction::ConfirmDownloadSelected).expect("confirm");

        let [PageEffect::SubmitForm(form)] = effects.as_slice() else {
            panic!("expected a single form submission, got {effects:?}");
        };
        assert_eq!(form.action, "/download-zip");
        assert_eq!(
            form.fields,
            vec![
                ("selectedFiles".to_string(), "x".to_string()),
                ("selectedFiles".to_string(), "y".to_string()),
                ("zipName".to_string(), "selected_files".to_string()),
            ]
        );
        assert!(!state.download_dialog.open);
    }

    #[test]
    fn confirm_download_revalidates_selection() {
        let mut state = state_with_listing(&["x"]);
        check(&mut state, "x");
        reduce_page(&mut state, PageAction::RequestDownloadSelected).expect("open");
        reduce_page(&mut state, PageAction::ClearSelection).expect("clear");

        let effects =
            reduce_page(&mut state, PageAction::ConfirmDownloadSelected).expect("confirm");

        assert_eq!(effects, vec![empty_selection_alert()]);
        assert!(state.download_dialog.open);
    }

    #[test]
    fn select_all_and_clear_drive_download_enablement() {
        let mut state = state_with_listing(&["1", "2", "3"]);
        reduce_page(&mut state, PageAction::SelectAll).expect("select all");
        assert_eq!(
            state.selected_ids(),
            vec![FileId::new("1"), FileId::new("2"), FileId::new("3")]
        );
        assert!(state.download_selected_enabled());

        reduce_page(&mut state, PageAction::ClearSelection).expect("clear");
        assert!(state.selected_ids().is_empty());
        assert!(!state.download_selected_enabled());

        assert_eq!(
            reduce_page(
                &mut state,
                PageAction::SetFileChecked {
                    file_id: FileId::new("404"),
                    checked: true
                }
            ),
            Err(ReducerError::FileNotFound(FileId::new("404")))
        );
    }

    #[test]
    fn delete_request_targets_file_and_confirm_submits_once() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::RequestDelete {
                file_id: FileId::new("42"),
                file_name: "report.pdf".to_string(),
            },
        )
        .expect("request delete");

        assert!(state.delete_dialog_open());
        assert_eq!(
            state.pending_delete.as_ref().map(|t| t.file_name.as_str()),
            Some("report.pdf")
        );
        assert_eq!(state.delete_form_action().as_deref(), Some("/delete/42"));

        let effects = reduce_page(&mut state, PageAction::ConfirmDelete).expect("confirm");
        assert_eq!(
            effects,
            vec![PageEffect::SubmitForm(FormSubmission::post("/delete/42"))]
        );
        assert!(!state.delete_dialog_open());
        assert_eq!(
            reduce_page(&mut state, PageAction::ConfirmDelete),
            Err(ReducerError::NoPendingDelete)
        );
    }

    #[test]
    fn later_delete_request_overwrites_and_cancel_clears() {
        let mut state = PageState::default();
        for (id, name) in [("1", "a.txt"), ("2", "b.txt")] {
            reduce_page(
                &mut state,
                PageAction::RequestDelete {
                    file_id: FileId::new(id),
                    file_name: name.to_string(),
                },
            )
            .expect("request delete");
        }
        assert_eq!(state.delete_form_action().as_deref(), Some("/delete/2"));

        reduce_page(&mut state, PageAction::CancelDelete).expect("cancel");
        assert!(state.pending_delete.is_none());
        assert!(state.delete_form_action().is_none());
    }

    #[test]
    fn toast_schedules_dismissal_and_late_dismissal_is_a_no_op() {
        let mut state = PageState::default();
        let effects = reduce_page(
            &mut state,
            PageAction::ShowToast {
                message: "hello".to_string(),
                severity: ToastSeverity::Info,
            },
        )
        .expect("show toast");

        let toast_id = state.toasts[0].id;
        assert_eq!(
            effects,
            vec![PageEffect::ScheduleToastDismiss {
                toast_id,
                after_ms: 3_000
            }]
        );

        reduce_page(&mut state, PageAction::DismissToast { toast_id }).expect("early dismiss");
        assert!(state.toasts.is_empty());

        let before = state.clone();
        reduce_page(&mut state, PageAction::DismissToast { toast_id }).expect("timer dismiss");
        assert_eq!(state, before);
    }

    #[test]
    fn toast_ids_are_unique_across_dismissals() {
        let mut state = PageState::default();
        for message in ["one", "two"] {
            reduce_page(
                &mut state,
                PageAction::ShowToast {
                    message: message.to_string(),
                    severity: ToastSeverity::Success,
                },
            )
            .expect("show toast");
        }
        let first = state.toasts[0].id;
        reduce_page(&mut state, PageAction::DismissToast { toast_id: first }).expect("dismiss");
        reduce_page(
            &mut state,
            PageAction::ShowToast {
                message: "three".to_string(),
                severity: ToastSeverity::Warning,
            },
        )
        .expect("show toast");

        let ids: Vec<_> = state.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![ToastId(2), ToastId(3)]);
    }

    #[test]
    fn failed_poll_marks_stale_and_later_success_recovers() {
        let mut state = PageState::default();
        reduce_page(
            &mut state,
            PageAction::StorageUsageLoaded {
                info: StorageInfo::from_totals(100, 50, 2),
                loaded_at_ms: 1,
            },
        )
        .expect("first poll");

        reduce_page(
            &mut state,
            PageAction::StoragePollFailed {
                error: "503".to_string(),
            },
        )
        .expect("failed poll");
        assert!(state.storage.stale);
        assert_eq!(state.storage.info.as_ref().map(|i| i.used_space), Some(50));

        reduce_page(
            &mut state,
            PageAction::StorageUsageLoaded {
                info: StorageInfo::from_totals(100, 90, 3),
                loaded_at_ms: 2,
            },
        )
        .expect("recovered poll");
        assert!(!state.storage.stale);
        assert!(state.storage.last_error.is_none());
        assert_eq!(state.storage.last_updated_ms, Some(2));
        assert_eq!(state.storage_level(), Some(StorageLevel::Warning));
    }

    #[test]
    fn begin_upload_requires_staged_files() {
        let mut state = PageState::default();
        assert_eq!(
            reduce_page(&mut state, PageAction::BeginUpload),
            Err(ReducerError::NothingStaged)
        );

        reduce_page(
            &mut state,
            PageAction::StageFiles {
                files: vec![staged(1, "a")],
            },
        )
        .expect("stage");
        reduce_page(&mut state, PageAction::BeginUpload).expect("upload");

        assert!(state.uploading);
        assert!(!state.upload_enabled());
        assert_eq!(state.upload_button_label(), "Uploading...");
    }

    #[test]
    fn picker_and_clipboard_actions_only_emit_effects() {
        let mut state = PageState::default();
        let before = state.clone();

        assert_eq!(
            reduce_page(&mut state, PageAction::OpenFilePicker).expect("picker"),
            vec![PageEffect::OpenFilePicker]
        );
        assert_eq!(
            reduce_page(
                &mut state,
                PageAction::CopyToClipboard {
                    text: "http://host/download/1".to_string()
                }
            )
            .expect("copy"),
            vec![PageEffect::WriteClipboard {
                text: "http://host/download/1".to_string()
            }]
        );
        assert_eq!(state, before);
    }
}

//! Upload file-input contracts.
//!
//! The browser keeps the real file handles inside the page's file input; the runtime only sees
//! [`StagedFileDescriptor`] values and asks the host to keep the input in sync with its list.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Metadata of one file chosen for upload.
pub struct StagedFileDescriptor {
    /// Host-assigned identity, stable for as long as the file stays staged.
    pub id: u64,
    /// File name as reported by the browser.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl StagedFileDescriptor {
    /// Creates a descriptor.
    pub fn new(id: u64, name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id,
            name: name.into(),
            size_bytes,
        }
    }
}

/// Host service owning the upload form's file input.
pub trait UploadInputService {
    /// Opens the native file picker for the upload input.
    fn open_picker(&self) -> Result<(), String>;

    /// Rebuilds the input's file collection so it contains exactly `keep`, in that order.
    fn retain_files(&self, keep: &[u64]) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Upload input service for pages without an upload form.
pub struct NoopUploadInputService;

impl UploadInputService for NoopUploadInputService {
    fn open_picker(&self) -> Result<(), String> {
        Ok(())
    }

    fn retain_files(&self, _keep: &[u64]) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory upload input that records picker requests and the retained id list.
pub struct MemoryUploadInputService {
    picker_opened: Rc<RefCell<usize>>,
    retained: Rc<RefCell<Option<Vec<u64>>>>,
}

impl MemoryUploadInputService {
    /// Number of picker requests so far.
    pub fn picker_open_count(&self) -> usize {
        *self.picker_opened.borrow()
    }

    /// Last retained id list, if any sync happened.
    pub fn retained(&self) -> Option<Vec<u64>> {
        self.retained.borrow().clone()
    }
}

impl UploadInputService for MemoryUploadInputService {
    fn open_picker(&self) -> Result<(), String> {
        *self.picker_opened.borrow_mut() += 1;
        Ok(())
    }

    fn retain_files(&self, keep: &[u64]) -> Result<(), String> {
        *self.retained.borrow_mut() = Some(keep.to_vec());
        Ok(())
    }
}

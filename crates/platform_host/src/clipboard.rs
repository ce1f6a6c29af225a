//! Clipboard host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing plain text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard service for targets without clipboard access.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async { Err("clipboard unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard holding the last written text.
pub struct MemoryClipboardService {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboardService {
    /// Returns the last written text.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}

//! Blocking user-alert contracts and test adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service for blocking, user-facing warnings.
pub trait AlertService {
    /// Shows `message` and returns once the user acknowledged it.
    fn alert(&self, message: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Alert service that drops messages.
pub struct NoopAlertService;

impl AlertService for NoopAlertService {
    fn alert(&self, _message: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory alert service that records shown messages.
pub struct MemoryAlertService {
    shown: Rc<RefCell<Vec<String>>>,
}

impl MemoryAlertService {
    /// Returns every message shown so far.
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl AlertService for MemoryAlertService {
    fn alert(&self, message: &str) -> Result<(), String> {
        self.shown.borrow_mut().push(message.to_string());
        Ok(())
    }
}

//! Form-submission model and submitter contracts.
//!
//! Bulk download and delete confirmation both leave the page through a plain HTML form post so
//! the server response (an archive or a redirect) is handled by browser navigation.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A `POST` form submission: target and hidden fields in order.
pub struct FormSubmission {
    /// Form action URL.
    pub action: String,
    /// Hidden `(name, value)` fields, in document order. Names may repeat.
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    /// Creates a `POST` submission with no fields.
    pub fn post(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a hidden field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Host service that submits a form and hands control to browser navigation.
pub trait FormSubmitter {
    /// Submits the form.
    fn submit(&self, submission: &FormSubmission) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Form submitter that discards submissions.
pub struct NoopFormSubmitter;

impl FormSubmitter for NoopFormSubmitter {
    fn submit(&self, _submission: &FormSubmission) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory form submitter that records every submission.
pub struct MemoryFormSubmitter {
    submitted: Rc<RefCell<Vec<FormSubmission>>>,
}

impl MemoryFormSubmitter {
    /// Returns the submissions recorded so far.
    pub fn submissions(&self) -> Vec<FormSubmission> {
        self.submitted.borrow().clone()
    }
}

impl FormSubmitter for MemoryFormSubmitter {
    fn submit(&self, submission: &FormSubmission) -> Result<(), String> {
        self.submitted.borrow_mut().push(submission.clone());
        Ok(())
    }
}

//! Shared UI primitive library for the file-hosting page.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the page stylesheet. Page components should compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, CheckboxField, DataTable, EmptyState, FieldVariant,
    Modal, ProgressBar, ProgressVariant, Surface, SurfaceVariant, TextField, TextTone, Toast,
    ToastRegion,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, CheckboxField, DataTable, EmptyState,
        FieldVariant, Modal, ProgressBar, ProgressVariant, Surface, SurfaceVariant, TextField,
        TextTone, Toast, ToastRegion,
    };
}

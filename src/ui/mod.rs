//! Presentation widgets: slide layouts, the edit overlay, and the
//! modal surfaces (photo picker, export view, status toasts).

pub mod export_modal;
pub mod overlay;
pub mod picker;
pub mod slides;
pub mod toast;

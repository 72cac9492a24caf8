//! Caller-side booking logic: seat and time selection plus the edit-mode form.

pub mod form;
pub mod selection;

pub use form::*;
pub use selection::*;

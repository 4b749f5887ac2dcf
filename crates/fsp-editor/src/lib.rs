//! fsp-editor
//!
//! Interactive expense-editing workflow as a pure reducer.
//! - `SplitSession` is an immutable snapshot of an in-progress split;
//!   `apply(event)` maps every user action (total change, member add or
//!   remove, manual edit, lock change, mode switch) to exactly one
//!   Allocator or Reconciler call and returns a fresh session.
//! - `submit()` runs the Validator; failure leaves the session intact so
//!   no user input is ever dropped on a validation error.
//! - `ExpenseDraft` carries the surrounding form fields (description,
//!   date, total) with their own field validation.

mod draft;
mod session;

pub use draft::{DraftError, ExpenseDraft};
pub use session::{SplitEvent, SplitMode, SplitSession};

//! Rendering pipeline
//!
//! Split in two pure halves so both can be tested without a UI:
//! [`view`] maps API payloads to display-ready view models, and
//! [`html`] turns view models into HTML fragments. [`format`] holds the
//! escaping and formatting primitives both rely on.

pub mod format;
pub mod html;
pub mod view;

pub use format::escape_html;
pub use view::{CommitRowView, RepoHeaderView};

//! Page router and application reducer.
//!
//! The router owns the closed page set, the shareable location fragment
//! codec, and the "exactly one view active" invariant. Application state
//! lives in immutable [`Snapshot`]s folded by a pure [`reduce`] function:
//! every event yields a new snapshot, the views to re-render, and the
//! effects (fragment updates, content loads, preference writes) for the
//! host to execute. Content loads carry a generation counter so responses
//! arriving after the user has moved on are discarded, not applied.

mod content;
mod page;
mod route;
mod state;
mod views;

pub use content::{PageContent, Section, load_page_content, placeholder_content};
pub use page::Page;
pub use route::Route;
pub use state::{Effect, Event, Snapshot, Update, reduce};
pub use views::ViewSet;

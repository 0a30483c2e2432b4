//! This crate provides the view models behind an admin dashboard.
//!
//! The core of it is [`Collection`](collection::Collection): an ordered list of records, with a categorical filter,
//! a search term and a selection set. Every list of the dashboard is an instance of it, over a different kind of record:
//! * [`inbox`] messages
//! * [`task`]s of the task board
//! * [`file`]s of the file manager
//! * calendar [`event`]s
//! * [`chat`] contacts and messages
//! * [`dashboard`] metrics
//!
//! Pages can be seeded with mock data from the [`data`] module. There is no persistence: everything lives in memory, for as long as the view model does.

pub mod traits;
pub mod error;
pub use error::ValidationError;

pub mod item;
pub use item::{Flags, ItemId};
pub mod collection;
pub use collection::Collection;

pub mod inbox;
pub mod task;
pub use task::Task;
pub mod file;
pub mod event;
pub use event::Event;
pub mod chat;
pub mod dashboard;

pub mod data;
pub mod config;
pub mod utils;

pub mod dates;
pub mod errors;
pub mod models;
pub mod page;
pub mod storage;
pub mod ui;
pub mod widget;
pub mod words;

pub use errors::{InitError, StoreError};
pub use models::DailyState;
pub use page::{HostPage, ReadyState};
pub use storage::{FileStore, MemoryStore, StateStore};
pub use widget::{FocusWidget, Startup, start};

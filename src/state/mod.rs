//! State Management
//!
//! Session, persisted storage, and global app state.

pub mod app;
pub mod session;
pub mod storage;

pub use app::{provide_app_state, AppState};
pub use session::{Session, SessionState};
pub use storage::{default_storage, BrowserStorage, KeyValueStorage, MemoryStorage};

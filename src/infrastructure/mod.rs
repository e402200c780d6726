//! Infrastructure layer - Storage, configuration and other external I/O

pub mod clock;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repository;
pub mod storage;

pub use clock::{clock_from_env, Clock, FixedClock, SystemClock};
pub use config::Config;
pub use editor::EditorSession;
pub use logging::init_logging;
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

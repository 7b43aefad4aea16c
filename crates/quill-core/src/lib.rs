//! # Quill Core
//!
//! Editor session, rendering and persistence.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Editor                         │
//! │  ┌────────────────┐  ┌──────────┐  ┌───────────────┐ │
//! │  │ ElementFactory │→ │ Document │→ │   Renderer    │ │
//! │  └────────────────┘  └──────────┘  └───────┬───────┘ │
//! │                                            │ text    │
//! │                                  ┌─────────┴───────┐ │
//! │                                  │   Persistence   │ │
//! │                                  │  (file / db)    │ │
//! │                                  └─────────────────┘ │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs synchronously on the caller's thread. Two sessions
//! pointed at the same storage location follow last-writer-wins; there
//! is no locking or conflict detection.

pub mod config;
pub mod editor;
pub mod event;
pub mod persistence;
pub mod renderer;

pub use config::{Config, ConfigError, StorageConfig};
pub use editor::{Editor, SessionState};
pub use event::{EventBus, SessionEvent};
pub use persistence::{DatabaseStorage, FileStorage, Persistence};
pub use renderer::Renderer;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    InvalidKind(#[from] quill_model::ModelError),

    #[error("Storage unavailable at {location}: {source}")]
    StorageUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No data found at {0}")]
    NoDataFound(String),

    #[error("Nothing to save: document has not been rendered")]
    NothingToSave,

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

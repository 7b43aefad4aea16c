//! # Quill
//!
//! Compose documents from typed content elements, render them to flat
//! text, and persist that text through a swappable backend.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quill::{Editor, FileStorage};
//!
//! let mut editor = Editor::new(FileStorage::new("document.txt"));
//! editor.add_text("Hello");
//! editor.add_line_break();
//! editor.add_text("World");
//!
//! assert_eq!(editor.render(), "Hello\nWorld");
//! editor.save()?;
//! # Ok::<(), quill::CoreError>(())
//! ```
//!
//! Logging goes through `tracing`; install a subscriber in the host
//! application to see it.

pub use quill_core::{
    Config, ConfigError, CoreError, CoreResult, DatabaseStorage, Editor, EventBus, FileStorage,
    Persistence, Renderer, SessionEvent, SessionState, StorageConfig,
};
pub use quill_model::{
    ContentElement, Document, DocumentId, ElementFactory, ElementKind, ModelError, ModelResult,
    parse_rendered,
};

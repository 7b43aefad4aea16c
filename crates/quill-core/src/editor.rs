//! Editor session orchestration.
//!
//! ## Learning: The Facade Pattern
//!
//! `Editor` is the one type callers need. It routes requests through
//! the factory, the document, the renderer and the storage backend,
//! and turns every failure into a `CoreResult` the caller can inspect.

use quill_model::{
    ContentElement, Document, ElementFactory, ElementKind, ModelError, parse_rendered,
};

use crate::config::Config;
use crate::event::{EventBus, SessionEvent};
use crate::persistence::Persistence;
use crate::renderer::Renderer;
use crate::{CoreError, CoreResult};

/// Where a session is in its compose/render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No elements and nothing rendered
    Empty,
    /// Elements present, with no render or a render older than the last append
    Composed,
    /// The cache reflects the current element sequence
    Rendered,
}

/// Output of the last render call.
#[derive(Debug, Clone)]
struct RenderCache {
    text: String,
    /// Element count when the text was produced
    elements: usize,
}

/// A single-user editing session.
///
/// Owns one document, one storage backend and the text produced by the
/// most recent render. The cache is never refreshed implicitly: `save`
/// writes exactly what the last `render` produced.
pub struct Editor {
    /// The document being composed
    document: Document,

    /// Where rendered text goes
    storage: Box<dyn Persistence>,

    /// Last render output
    cache: Option<RenderCache>,

    /// Event bus for notifications
    event_bus: EventBus,
}

impl Editor {
    /// Creates a session with an empty document.
    pub fn new(storage: impl Persistence + 'static) -> Self {
        Self::with_boxed_storage(Box::new(storage))
    }

    /// Creates a session from an already boxed backend.
    pub fn with_boxed_storage(storage: Box<dyn Persistence>) -> Self {
        tracing::debug!("Editor session using {}", storage.location());
        Self {
            document: Document::new(),
            storage,
            cache: None,
            event_bus: EventBus::new(),
        }
    }

    /// Creates a session with the configured backend.
    pub fn from_config(config: &Config) -> Self {
        Self::with_boxed_storage(config.storage.open())
    }

    // ==================== Composition ====================

    /// Builds an element of `kind` and appends it.
    pub fn add_element(&mut self, kind: ElementKind, content: &str) {
        self.append(ElementFactory::create(kind, content));
    }

    /// Builds an element from a kind tag and appends it.
    ///
    /// An unknown tag is rejected and the document is left unchanged.
    pub fn add_element_tagged(&mut self, tag: &str, content: &str) -> CoreResult<()> {
        let Some(element) = ElementFactory::create_from_tag(tag, content) else {
            tracing::warn!("Rejected element with unknown kind {:?}", tag);
            return Err(ModelError::InvalidKind(tag.to_string()).into());
        };
        self.append(element);
        Ok(())
    }

    /// Appends a text run.
    pub fn add_text(&mut self, text: &str) {
        self.add_element(ElementKind::Text, text);
    }

    /// Appends an image reference.
    pub fn add_image(&mut self, path: &str) {
        self.add_element(ElementKind::Image, path);
    }

    /// Appends a line break.
    pub fn add_line_break(&mut self) {
        self.add_element(ElementKind::LineBreak, "");
    }

    /// Appends a tab.
    pub fn add_tab(&mut self) {
        self.add_element(ElementKind::Tab, "");
    }

    fn append(&mut self, element: ContentElement) {
        let kind = element.kind();
        let index = self.document.len();
        self.document.append(element);

        tracing::debug!("Appended {} element at {}", kind, index);
        self.emit(SessionEvent::ElementAdded {
            document: self.document.id(),
            index,
            kind,
        });
    }

    // ==================== Rendering ====================

    /// Renders the document and replaces the cached text.
    pub fn render(&mut self) -> &str {
        let text = Renderer::new(&self.document).render();

        tracing::debug!(
            "Rendered {} elements into {} bytes",
            self.document.len(),
            text.len()
        );
        self.emit(SessionEvent::Rendered {
            document: self.document.id(),
            bytes: text.len(),
        });

        let cache = self.cache.insert(RenderCache {
            text,
            elements: self.document.len(),
        });
        &cache.text
    }

    /// Returns the text from the last render, if any.
    pub fn rendered(&self) -> Option<&str> {
        self.cache.as_ref().map(|c| c.text.as_str())
    }

    /// Returns true if elements were appended since the last render.
    pub fn is_stale(&self) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|c| c.elements != self.document.len())
    }

    /// Returns the current session state.
    pub fn state(&self) -> SessionState {
        match &self.cache {
            Some(_) if !self.is_stale() => SessionState::Rendered,
            _ if self.document.is_empty() => SessionState::Empty,
            _ => SessionState::Composed,
        }
    }

    // ==================== Persistence ====================

    /// Saves the cached render output.
    ///
    /// Fails with `CoreError::NothingToSave` if nothing was rendered
    /// yet; storage is not touched in that case. A render older than the
    /// latest append is still saved as-is, logged at warn level and
    /// flagged `stale` in the `Saved` event.
    pub fn save(&mut self) -> CoreResult<()> {
        let Some(cache) = &self.cache else {
            tracing::debug!("Save skipped: nothing rendered");
            return Err(CoreError::NothingToSave);
        };

        let stale = cache.elements != self.document.len();
        if stale {
            tracing::warn!(
                "Saving render of {} elements; document now has {}",
                cache.elements,
                self.document.len()
            );
        }

        self.storage.save(&cache.text)?;

        self.emit(SessionEvent::Saved {
            location: self.storage.location(),
            bytes: cache.text.len(),
            stale,
        });
        Ok(())
    }

    /// Loads the stored text without touching the document.
    pub fn load(&self) -> CoreResult<String> {
        let text = self.storage.load()?;
        self.emit(SessionEvent::Loaded {
            location: self.storage.location(),
            bytes: text.len(),
        });
        Ok(text)
    }

    /// Replaces the document with one rebuilt from the stored text.
    ///
    /// The render cache is dropped. Returns the number of elements in
    /// the restored document.
    pub fn restore(&mut self) -> CoreResult<usize> {
        let text = self.load()?;

        let mut document = Document::new();
        document.extend(parse_rendered(&text));
        let elements = document.len();

        self.document = document;
        self.cache = None;

        tracing::info!(
            "Restored {} elements from {}",
            elements,
            self.storage.location()
        );
        self.emit(SessionEvent::Restored {
            document: self.document.id(),
            elements,
        });
        Ok(elements)
    }

    /// Swaps the storage backend. The render cache is kept.
    pub fn set_storage(&mut self, storage: impl Persistence + 'static) {
        self.storage = Box::new(storage);
        self.emit(SessionEvent::StorageReplaced {
            location: self.storage.location(),
        });
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &dyn Persistence {
        self.storage.as_ref()
    }

    // ==================== Accessors ====================

    /// Returns the session document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Subscribes to session events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        self.event_bus.emit(event);
    }
}

//! The process-wide style registry.
//!
//! Most code should own a [`Document`] and pass it around. The registry is
//! for the case where styles are declared from many unrelated places and
//! rendered once at the end:
//!
//! ```rust
//! use stylecraft::{clear_registry, register, render_registered, Tree};
//!
//! register(Tree::new().add("p", Tree::new().add("margin", 0)));
//! assert!(render_registered().contains("p {\n\tmargin: 0\n}"));
//! clear_registry();
//! ```
//!
//! Rendering does not drain the registry; call [`clear_registry`] when the
//! output has been written. Settings survive clearing and can be changed
//! through [`with_registry`].

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::document::Document;
use crate::value::Tree;

static REGISTRY: Lazy<Mutex<Document>> = Lazy::new(|| Mutex::new(Document::new()));

fn lock() -> MutexGuard<'static, Document> {
    // A panic while holding the lock leaves the document itself intact.
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Appends a tree to the registry.
pub fn register(tree: Tree) {
    lock().push(tree);
}

/// Appends raw CSS text to the registry.
pub fn register_raw(css: impl Into<String>) {
    lock().push_raw(css);
}

/// Renders everything registered so far.
pub fn render_registered() -> String {
    lock().render()
}

/// Drops every registered entry, keeping settings.
pub fn clear_registry() {
    lock().clear();
}

/// Runs `f` with exclusive access to the registry document.
///
/// ```rust
/// use stylecraft::{with_registry, Unit};
///
/// with_registry(|doc| doc.settings_mut().unit = Unit::Em);
/// # with_registry(|doc| doc.settings_mut().unit = Unit::Px);
/// ```
pub fn with_registry<R>(f: impl FnOnce(&mut Document) -> R) -> R {
    f(&mut lock())
}

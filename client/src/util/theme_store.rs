//! Durable storage for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference lives under one `localStorage` key scoped to the site's
//! origin. `ThemeStore` hides the browser so the controller can run against
//! an in-memory store in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail: a missing window, disabled storage, or a malformed value
//! all read as "no preference". Writes report failure to the caller, which
//! decides whether to care.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::state::theme::Theme;

/// Storage key shared by reads and writes.
pub const STORAGE_KEY: &str = "theme";

/// Errors produced when persisting a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeStoreError {
    /// No storage backend is reachable (SSR, storage disabled, no window).
    #[error("theme storage unavailable")]
    Unavailable,

    /// The backend rejected the write (quota, privacy mode).
    #[error("theme storage write failed: {0}")]
    Write(String),
}

/// Persisted home of the theme preference.
pub trait ThemeStore {
    /// Stored theme, or `None` when absent or unrecognized.
    fn get(&self) -> Option<Theme>;

    /// Persist `theme` under [`STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] when the backend is missing or refuses
    /// the write.
    fn set(&mut self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// Browser `localStorage` backed store. Inert outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ThemeStore for LocalStorageThemeStore {
    fn get(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
            raw.parse().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(ThemeStoreError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| ThemeStoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(ThemeStoreError::Unavailable)
        }
    }
}

/// In-memory store holding the raw stored string.
///
/// Clones share the same cell, so a second controller built from a clone
/// observes what the first one wrote. That is how tests model a reload.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryThemeStore {
    raw: Rc<RefCell<Option<String>>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an arbitrary raw value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Rc::new(RefCell::new(Some(raw.into()))), read_only: false }
    }

    /// Handle over the same cell that rejects every write.
    #[must_use]
    pub fn read_only(&self) -> Self {
        Self { raw: Rc::clone(&self.raw), read_only: true }
    }

    /// Raw stored string, as a browser devtools panel would show it.
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    /// Drop the stored value, as an external "clear site data" would.
    pub fn clear(&self) {
        self.raw.borrow_mut().take();
    }
}

#[cfg(test)]
impl ThemeStore for MemoryThemeStore {
    fn get(&self) -> Option<Theme> {
        self.raw.borrow().as_deref()?.parse().ok()
    }

    fn set(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        if self.read_only {
            return Err(ThemeStoreError::Write("store is read-only".to_owned()));
        }
        *self.raw.borrow_mut() = Some(theme.as_str().to_owned());
        Ok(())
    }
}

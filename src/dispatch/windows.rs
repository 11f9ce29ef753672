// SPDX-License-Identifier: MPL-2.0
//! Registry of open application windows, used to find a dialog owner.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use super::UiHandle;

/// A native window that dialogs can be parented to.
///
/// Implemented for every toolkit window exposing `raw-window-handle` handles.
pub trait ParentWindow: HasWindowHandle + HasDisplayHandle + Send + Sync {}

impl<T> ParentWindow for T where T: HasWindowHandle + HasDisplayHandle + Send + Sync + ?Sized {}

/// Identifier of a registered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// An open window that can own dialogs.
#[derive(Clone)]
pub struct OwnerWindow {
    id: WindowId,
    title: String,
    ui: UiHandle,
    parent: Option<Arc<dyn ParentWindow>>,
}

impl fmt::Debug for OwnerWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerWindow")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("ui", &self.ui)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

impl OwnerWindow {
    #[must_use]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle of the UI loop that owns this window.
    #[must_use]
    pub fn ui(&self) -> &UiHandle {
        &self.ui
    }

    /// Native handle dialogs are parented to, if the window registered one.
    #[must_use]
    pub fn parent(&self) -> Option<&dyn ParentWindow> {
        self.parent.as_deref()
    }
}

#[derive(Debug, Default)]
struct Shared {
    /// Open windows, oldest first.
    windows: Mutex<Vec<OwnerWindow>>,
    next_id: AtomicU64,
}

/// Tracks open windows in opening order; the last one is topmost.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    shared: Arc<Shared>,
}

impl WindowRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a window owned by the loop behind `ui`.
    ///
    /// The window stays registered until the returned guard is dropped.
    /// Dialogs it owns are shown on its UI thread but without a native
    /// parent; use [`open_with_parent`](Self::open_with_parent) to stack
    /// them above the window.
    pub fn open(&self, title: impl Into<String>, ui: UiHandle) -> WindowGuard {
        self.register(title.into(), ui, None)
    }

    /// Registers a window together with its native handle.
    pub fn open_with_parent(
        &self,
        title: impl Into<String>,
        ui: UiHandle,
        parent: Arc<dyn ParentWindow>,
    ) -> WindowGuard {
        self.register(title.into(), ui, Some(parent))
    }

    fn register(
        &self,
        title: String,
        ui: UiHandle,
        parent: Option<Arc<dyn ParentWindow>>,
    ) -> WindowGuard {
        let id = WindowId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        let window = OwnerWindow {
            id,
            title,
            ui,
            parent,
        };

        match self.shared.windows.lock() {
            Ok(mut windows) => windows.push(window),
            Err(poisoned) => poisoned.into_inner().push(window),
        }

        WindowGuard {
            registry: self.clone(),
            id,
        }
    }

    /// Returns the most recently opened window that is still open.
    ///
    /// A poisoned registry counts as "no window".
    #[must_use]
    pub fn topmost(&self) -> Option<OwnerWindow> {
        match self.shared.windows.lock() {
            Ok(windows) => windows.last().cloned(),
            Err(_) => {
                tracing::debug!("window registry poisoned; showing dialog without owner");
                None
            }
        }
    }

    /// Number of open windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.windows.lock().map(|w| w.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn close(&self, id: WindowId) {
        let mut windows = match self.shared.windows.lock() {
            Ok(windows) => windows,
            Err(poisoned) => poisoned.into_inner(),
        };
        windows.retain(|w| w.id != id);
    }
}

/// Keeps a window registered; closes it on drop.
#[derive(Debug)]
pub struct WindowGuard {
    registry: WindowRegistry,
    id: WindowId,
}

impl WindowGuard {
    #[must_use]
    pub fn id(&self) -> WindowId {
        self.id
    }
}

impl Drop for WindowGuard {
    fn drop(&mut self) {
        self.registry.close(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::UiLoop;
    use raw_window_handle::{DisplayHandle, HandleError, WindowHandle};

    struct DetachedWindow;

    impl HasWindowHandle for DetachedWindow {
        fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
            Err(HandleError::Unavailable)
        }
    }

    impl HasDisplayHandle for DetachedWindow {
        fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
            Err(HandleError::Unavailable)
        }
    }

    #[test]
    fn parent_handle_is_kept_with_the_window() {
        let ui_loop = UiLoop::new();
        let registry = WindowRegistry::new();

        let _plain = registry.open("Plain", ui_loop.handle());
        assert!(registry.topmost().is_some_and(|w| w.parent().is_none()));

        let _native =
            registry.open_with_parent("Native", ui_loop.handle(), Arc::new(DetachedWindow));
        let top = registry.topmost().expect("a window is open");
        assert_eq!(top.title(), "Native");
        assert!(top.parent().is_some());
    }

    #[test]
    fn empty_registry_has_no_topmost() {
        let registry = WindowRegistry::new();
        assert!(registry.topmost().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn last_opened_window_is_topmost() {
        let ui_loop = UiLoop::new();
        let registry = WindowRegistry::new();

        let _main = registry.open("Main", ui_loop.handle());
        let options = registry.open("Options", ui_loop.handle());

        let top = registry.topmost().expect("a window is open");
        assert_eq!(top.id(), options.id());
        assert_eq!(top.title(), "Options");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn dropping_guard_closes_window() {
        let ui_loop = UiLoop::new();
        let registry = WindowRegistry::new();

        let main = registry.open("Main", ui_loop.handle());
        {
            let _dialog = registry.open("Dialog", ui_loop.handle());
            assert_eq!(
                registry.topmost().map(|w| w.title().to_string()),
                Some("Dialog".into())
            );
        }

        assert_eq!(registry.topmost().map(|w| w.id()), Some(main.id()));
        drop(main);
        assert!(registry.topmost().is_none());
    }

    #[test]
    fn closing_a_lower_window_keeps_topmost() {
        let ui_loop = UiLoop::new();
        let registry = WindowRegistry::new();

        let main = registry.open("Main", ui_loop.handle());
        let top = registry.open("Top", ui_loop.handle());
        drop(main);

        assert_eq!(registry.topmost().map(|w| w.id()), Some(top.id()));
    }
}

//! Application state
//!
//! One instance is created at startup and passed by reference to every
//! command; there is no global store.

use layer_model::Page;
use layer_store::{LayersStore, PanelSettings, SidebarStore, ZoomState};

/// State for one open document view
pub struct AppState {
    /// Pages, current page, selection, and layers panel
    pub layers: LayersStore,
    /// Sidebar width and rename session
    pub sidebar: SidebarStore,
    /// Canvas zoom
    pub zoom: ZoomState,
}

impl AppState {
    /// Create empty state with the given settings
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            layers: LayersStore::with_settings(settings.layers_panel),
            sidebar: SidebarStore::with_settings(settings.sidebar),
            zoom: ZoomState::with_settings(settings.zoom),
        }
    }

    /// Load a document, replacing any pages already open
    pub fn load_document(&mut self, pages: Vec<Page>) -> layer_store::Result<()> {
        self.layers.load_pages(pages)?;
        self.sidebar.cancel_rename();
        tracing::info!(
            pages = self.layers.pages().len(),
            current = ?self.layers.current_page_id(),
            "document loaded"
        );
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PanelSettings::default())
    }
}

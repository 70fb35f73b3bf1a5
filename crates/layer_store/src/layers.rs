//! Page and layer tree store
//!
//! [`LayersStore`] owns the document's pages and the selection. Every tree
//! operation runs against the children of the current page only: the store
//! calls a pure `layer_model` function, then swaps the result in as that
//! page's children. Unknown ids and an unresolved current page make every
//! operation a silent no-op.

use crate::settings::{clamp_to, LayersPanelSettings};
use crate::{LayerSelection, Result};
use layer_model::{
    collapse_all, delete_node, duplicate_node, expand_all, find_node_by_id, link_parents,
    rename_node, toggle_node_expanded, update_node_lock_state, update_node_visibility,
    validate_pages, LayerId, LayerNode, Page,
};

/// Collapse state and width of the layers panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    collapsed: bool,
    width: f32,
    limits: LayersPanelSettings,
}

impl PanelState {
    fn new(limits: LayersPanelSettings) -> Self {
        Self {
            collapsed: false,
            width: clamp_to(limits.default_width, limits.min_width, limits.max_width),
            limits,
        }
    }
}

/// Pages, current page, selection, and panel state of one document view
#[derive(Debug, Clone)]
pub struct LayersStore {
    pages: Vec<Page>,
    current_page_id: Option<LayerId>,
    selection: LayerSelection,
    panel: PanelState,
}

impl LayersStore {
    /// Create an empty store with default panel limits
    pub fn new() -> Self {
        Self::with_settings(LayersPanelSettings::default())
    }

    /// Create an empty store with the given panel limits
    pub fn with_settings(settings: LayersPanelSettings) -> Self {
        Self {
            pages: Vec::new(),
            current_page_id: None,
            selection: LayerSelection::new(),
            panel: PanelState::new(settings),
        }
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    /// Replace all pages as given
    pub fn set_pages(&mut self, pages: Vec<Page>) {
        tracing::debug!(count = pages.len(), "set pages");
        self.pages = pages;
    }

    /// Validate a document, fill its parent links, and replace all pages.
    ///
    /// If the current page is not part of the new document, the first page
    /// becomes current. The selection is cleared.
    pub fn load_pages(&mut self, pages: Vec<Page>) -> Result<()> {
        validate_pages(&pages)?;
        let pages = link_parents(pages);

        let keeps_current = self
            .current_page_id
            .as_ref()
            .is_some_and(|id| pages.iter().any(|p| &p.id == id));
        if !keeps_current {
            self.current_page_id = pages.first().map(|p| p.id.clone());
        }

        tracing::debug!(count = pages.len(), current = ?self.current_page_id, "loaded pages");
        self.pages = pages;
        self.selection.clear();
        Ok(())
    }

    /// Make a page current; the id is not checked
    pub fn set_current_page(&mut self, page_id: &str) {
        tracing::debug!(page = page_id, "set current page");
        self.current_page_id = Some(LayerId::from(page_id));
    }

    /// Get all pages
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the current page id, resolved or not
    pub fn current_page_id(&self) -> Option<&LayerId> {
        self.current_page_id.as_ref()
    }

    /// Get the current page if it exists
    pub fn current_page(&self) -> Option<&Page> {
        let id = self.current_page_id.as_ref()?;
        self.pages.iter().find(|p| &p.id == id)
    }

    /// Get the root layers of the current page
    pub fn current_layers(&self) -> Option<&[LayerNode]> {
        self.current_page().map(|p| p.children.as_slice())
    }

    /// Find a layer on the current page
    pub fn find_layer(&self, id: &str) -> Option<&LayerNode> {
        find_node_by_id(self.current_layers()?, id)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Get the selection
    pub fn selection(&self) -> &LayerSelection {
        &self.selection
    }

    /// Select exactly one layer
    pub fn select_node(&mut self, id: &str) {
        self.selection.select(id);
    }

    /// Toggle one layer in or out of the selection
    pub fn multi_select(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Select the layers between the focus anchor and `id` on the current page
    pub fn range_select(&mut self, id: &str) {
        let nodes = self
            .current_page_id
            .as_ref()
            .and_then(|page_id| self.pages.iter().find(|p| &p.id == page_id))
            .map(|p| p.children.as_slice());
        self.selection.select_range(nodes, id);
    }

    /// Clear selection and focus
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Check if a layer is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Get the selected ids
    pub fn selected_ids(&self) -> Vec<LayerId> {
        self.selection.selected_ids()
    }

    /// Get the focus anchor
    pub fn focused_id(&self) -> Option<&LayerId> {
        self.selection.focused_id()
    }

    /// Move the focus anchor
    pub fn set_focused_node(&mut self, id: Option<&str>) {
        self.selection.set_focused(id.map(LayerId::from));
    }

    // ------------------------------------------------------------------
    // Tree operations
    // ------------------------------------------------------------------

    /// Replace the current page's children with `op(children)`.
    ///
    /// Returns false when there is no current page.
    fn update_current_page<F>(&mut self, action: &str, op: F) -> bool
    where
        F: FnOnce(&[LayerNode]) -> Vec<LayerNode>,
    {
        let Some(page_id) = self.current_page_id.as_ref() else {
            tracing::trace!(action, "no current page");
            return false;
        };
        let Some(page) = self.pages.iter_mut().find(|p| &p.id == page_id) else {
            tracing::trace!(action, page = %page_id, "current page not found");
            return false;
        };

        page.children = op(&page.children);
        tracing::debug!(action, page = %page_id, "updated page");
        true
    }

    /// Flip whether a layer's children are shown
    pub fn toggle_node_expanded(&mut self, id: &str) {
        self.update_current_page("toggle_expanded", |nodes| toggle_node_expanded(nodes, id));
    }

    /// Collapse every layer on the current page
    pub fn collapse_all(&mut self) {
        self.update_current_page("collapse_all", collapse_all);
    }

    /// Expand every layer on the current page
    pub fn expand_all(&mut self) {
        self.update_current_page("expand_all", expand_all);
    }

    /// Invert a layer's visibility and cascade it to all descendants
    pub fn toggle_node_visibility(&mut self, id: &str) {
        let Some(visible) = self.find_layer(id).map(|n| n.visible) else {
            tracing::trace!(layer = id, "visibility toggle on unknown layer");
            return;
        };
        self.update_current_page("toggle_visibility", |nodes| {
            update_node_visibility(nodes, id, !visible, true)
        });
    }

    /// Invert a layer's own lock flag
    pub fn toggle_node_lock_state(&mut self, id: &str) {
        let Some(locked) = self.find_layer(id).map(|n| n.locked) else {
            tracing::trace!(layer = id, "lock toggle on unknown layer");
            return;
        };
        self.update_current_page("toggle_lock", |nodes| update_node_lock_state(nodes, id, !locked));
    }

    /// Set a layer's display name
    pub fn rename_node(&mut self, id: &str, name: &str) {
        self.update_current_page("rename", |nodes| rename_node(nodes, id, name));
    }

    /// Remove a layer and its subtree, then drop selection entries that went
    /// with it
    pub fn delete_node(&mut self, id: &str) {
        if !self.update_current_page("delete", |nodes| delete_node(nodes, id)) {
            return;
        }

        let Self {
            pages,
            current_page_id,
            selection,
            ..
        } = self;
        let page = current_page_id
            .as_ref()
            .and_then(|page_id| pages.iter().find(|p| &p.id == page_id));
        if let Some(page) = page {
            selection.prune_missing(&page.children);
        }
    }

    /// Insert a copy of a layer (with fresh ids) right after it
    pub fn duplicate_node(&mut self, id: &str) {
        self.update_current_page("duplicate", |nodes| duplicate_node(nodes, id));
    }

    // ------------------------------------------------------------------
    // Panel
    // ------------------------------------------------------------------

    /// Check if the layers panel is collapsed
    pub fn is_panel_collapsed(&self) -> bool {
        self.panel.collapsed
    }

    /// Collapse or restore the layers panel
    pub fn set_panel_collapsed(&mut self, collapsed: bool) {
        self.panel.collapsed = collapsed;
    }

    /// Flip the layers panel collapse state
    pub fn toggle_panel_collapsed(&mut self) {
        self.panel.collapsed = !self.panel.collapsed;
    }

    /// Get the layers panel width
    pub fn collapsed_panel_width(&self) -> f32 {
        self.panel.width
    }

    /// Set the layers panel width, clamped to the configured limits
    pub fn set_collapsed_panel_width(&mut self, width: f32) {
        let limits = &self.panel.limits;
        self.panel.width = clamp_to(width, limits.min_width, limits.max_width);
    }
}

impl Default for LayersStore {
    fn default() -> Self {
        Self::new()
    }
}

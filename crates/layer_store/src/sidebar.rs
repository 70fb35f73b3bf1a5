//! Sidebar state: width, active page, expansion, and inline rename
//!
//! The active page and per-layer expansion are not stored here. They live in
//! the [`LayersStore`] (the current page id and each node's `expanded` flag),
//! so the sidebar and the layers panel can never disagree about them. The
//! sidebar reads and writes them through an explicitly passed store.

use crate::settings::{clamp_to, SidebarSettings};
use crate::LayersStore;
use layer_model::LayerId;

/// Sidebar width and rename session
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarStore {
    width: f32,
    limits: SidebarSettings,
    renaming_id: Option<LayerId>,
}

impl SidebarStore {
    /// Create a sidebar with default limits
    pub fn new() -> Self {
        Self::with_settings(SidebarSettings::default())
    }

    /// Create a sidebar with the given width limits
    pub fn with_settings(limits: SidebarSettings) -> Self {
        Self {
            width: clamp_to(limits.default_width, limits.min_width, limits.max_width),
            limits,
            renaming_id: None,
        }
    }

    /// Get the sidebar width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the sidebar width, clamped to the configured limits
    pub fn set_width(&mut self, width: f32) {
        self.width = clamp_to(width, self.limits.min_width, self.limits.max_width);
    }

    /// Get the active page id
    pub fn active_page_id<'a>(&self, layers: &'a LayersStore) -> Option<&'a LayerId> {
        layers.current_page_id()
    }

    /// Switch pages. The selection and any rename in progress are dropped.
    pub fn set_active_page(&mut self, layers: &mut LayersStore, page_id: &str) {
        layers.set_current_page(page_id);
        layers.deselect_all();
        self.renaming_id = None;
    }

    /// Check if a layer on the active page is expanded
    pub fn is_expanded(&self, layers: &LayersStore, id: &str) -> bool {
        layers.find_layer(id).is_some_and(|n| n.expanded)
    }

    /// Flip whether a layer's children are shown
    pub fn toggle_layer_expanded(&mut self, layers: &mut LayersStore, id: &str) {
        layers.toggle_node_expanded(id);
    }

    /// Get the layer being renamed
    pub fn renaming_id(&self) -> Option<&LayerId> {
        self.renaming_id.as_ref()
    }

    /// Start renaming a layer on the active page; unknown ids are ignored
    pub fn begin_rename(&mut self, layers: &LayersStore, id: &str) {
        if layers.find_layer(id).is_some() {
            self.renaming_id = Some(LayerId::from(id));
        } else {
            tracing::trace!(layer = id, "rename requested for unknown layer");
        }
    }

    /// Finish the rename session, applying `name` if it is not blank
    pub fn commit_rename(&mut self, layers: &mut LayersStore, name: &str) {
        let Some(id) = self.renaming_id.take() else {
            return;
        };

        let name = name.trim();
        if name.is_empty() {
            tracing::debug!(layer = %id, "ignored blank layer name");
            return;
        }
        layers.rename_node(id.as_str(), name);
    }

    /// Abandon the rename session
    pub fn cancel_rename(&mut self) {
        self.renaming_id = None;
    }
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_model::{LayerKind, LayerNode};

    fn layers() -> LayersStore {
        let mut layers = LayersStore::new();
        layers
            .load_pages(vec![
                LayerNode::new("page-1", "Page 1", LayerKind::Frame).with_children(vec![
                    LayerNode::new("frame-hero", "Hero", LayerKind::Frame)
                        .expanded()
                        .with_children(vec![LayerNode::new("text-title", "Title", LayerKind::Text)]),
                ]),
                LayerNode::new("page-2", "Page 2", LayerKind::Frame),
            ])
            .unwrap();
        layers
    }

    #[test]
    fn test_width_is_clamped() {
        let mut sidebar = SidebarStore::new();
        assert_eq!(sidebar.width(), 240.0);

        sidebar.set_width(100.0);
        assert_eq!(sidebar.width(), 180.0);
        sidebar.set_width(1000.0);
        assert_eq!(sidebar.width(), 360.0);
        sidebar.set_width(300.0);
        assert_eq!(sidebar.width(), 300.0);
    }

    #[test]
    fn test_active_page_is_shared_with_layers() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();
        layers.select_node("text-title");

        sidebar.set_active_page(&mut layers, "page-2");
        assert_eq!(sidebar.active_page_id(&layers).map(LayerId::as_str), Some("page-2"));
        assert_eq!(layers.current_page_id().map(LayerId::as_str), Some("page-2"));
        assert!(layers.selected_ids().is_empty());
    }

    #[test]
    fn test_expansion_reads_node_flag() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();
        assert!(sidebar.is_expanded(&layers, "frame-hero"));

        sidebar.toggle_layer_expanded(&mut layers, "frame-hero");
        assert!(!sidebar.is_expanded(&layers, "frame-hero"));
        assert!(!layers.find_layer("frame-hero").unwrap().expanded);
        assert!(!sidebar.is_expanded(&layers, "missing"));
    }

    #[test]
    fn test_rename_session() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();

        sidebar.begin_rename(&layers, "text-title");
        assert_eq!(sidebar.renaming_id().map(LayerId::as_str), Some("text-title"));

        sidebar.commit_rename(&mut layers, "  Headline ");
        assert!(sidebar.renaming_id().is_none());
        assert_eq!(layers.find_layer("text-title").unwrap().name, "Headline");
    }

    #[test]
    fn test_blank_rename_is_ignored() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();

        sidebar.begin_rename(&layers, "text-title");
        sidebar.commit_rename(&mut layers, "   ");
        assert!(sidebar.renaming_id().is_none());
        assert_eq!(layers.find_layer("text-title").unwrap().name, "Title");
    }

    #[test]
    fn test_rename_unknown_or_cancelled() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();

        sidebar.begin_rename(&layers, "missing");
        assert!(sidebar.renaming_id().is_none());

        sidebar.begin_rename(&layers, "text-title");
        sidebar.cancel_rename();
        sidebar.commit_rename(&mut layers, "Nope");
        assert_eq!(layers.find_layer("text-title").unwrap().name, "Title");
    }

    #[test]
    fn test_switching_page_ends_rename() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();

        sidebar.begin_rename(&layers, "text-title");
        sidebar.set_active_page(&mut layers, "page-2");
        assert!(sidebar.renaming_id().is_none());
    }
}

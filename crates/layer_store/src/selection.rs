//! Layer selection and focus anchor

use layer_model::{find_node_by_id, get_layers_between, LayerId, LayerNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selected layers plus the focus anchor used by range selection.
///
/// The focus is the most recently interacted-with layer. It does not have to
/// be selected: toggling a layer off still moves the focus to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSelection {
    selected: BTreeSet<LayerId>,
    focused: Option<LayerId>,
}

impl LayerSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a layer is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the selected ids in id order
    pub fn selected_ids(&self) -> Vec<LayerId> {
        self.selected.iter().cloned().collect()
    }

    /// Number of selected layers
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the focus anchor
    pub fn focused_id(&self) -> Option<&LayerId> {
        self.focused.as_ref()
    }

    /// Move the focus anchor without touching the selection
    pub fn set_focused(&mut self, id: Option<LayerId>) {
        self.focused = id;
    }

    /// Select exactly one layer
    pub fn select(&mut self, id: &str) {
        self.selected.clear();
        self.selected.insert(LayerId::from(id));
        self.focused = Some(LayerId::from(id));
    }

    /// Add a layer to the selection, or remove it if already selected
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(LayerId::from(id));
        }
        self.focused = Some(LayerId::from(id));
    }

    /// Select every layer between the focus anchor and `id`.
    ///
    /// Falls back to [`select`](Self::select) when there is no anchor or no
    /// tree to resolve it against. The anchor then moves to `id`, so the next
    /// range starts from here.
    pub fn select_range(&mut self, nodes: Option<&[LayerNode]>, id: &str) {
        let (Some(nodes), Some(anchor)) = (nodes, self.focused.clone()) else {
            self.select(id);
            return;
        };

        self.selected = get_layers_between(nodes, anchor.as_str(), id).into_iter().collect();
        self.focused = Some(LayerId::from(id));
    }

    /// Clear the selection and the focus anchor
    pub fn clear(&mut self) {
        self.selected.clear();
        self.focused = None;
    }

    /// Drop selected ids and the focus when they no longer exist in `nodes`
    pub fn prune_missing(&mut self, nodes: &[LayerNode]) {
        self.selected.retain(|id| find_node_by_id(nodes, id.as_str()).is_some());
        if let Some(focused) = &self.focused {
            if find_node_by_id(nodes, focused.as_str()).is_none() {
                self.focused = None;
            }
        }
    }
}

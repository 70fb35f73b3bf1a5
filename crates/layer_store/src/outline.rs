//! Rows shown by the layer tree view

use crate::LayerSelection;
use layer_model::{LayerId, LayerKind, LayerNode};
use serde::{Deserialize, Serialize};

/// One rendered row of the layer tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRow {
    pub id: LayerId,
    pub name: String,
    pub kind: LayerKind,
    /// Indent level; roots are 0
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    /// The layer's own flags, as shown by the eye and lock toggles
    pub visible: bool,
    pub locked: bool,
    /// Flags combined with every ancestor, used to dim rows
    pub effectively_visible: bool,
    pub effectively_locked: bool,
}

/// Build the rows the tree view renders, in display order.
///
/// Children appear only under expanded nodes.
pub fn outline_rows(nodes: &[LayerNode], selection: &LayerSelection) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    collect_rows(nodes, selection, 0, true, false, &mut rows);
    rows
}

fn collect_rows(
    nodes: &[LayerNode],
    selection: &LayerSelection,
    depth: usize,
    parent_visible: bool,
    parent_locked: bool,
    rows: &mut Vec<OutlineRow>,
) {
    for node in nodes {
        let effectively_visible = parent_visible && node.visible;
        let effectively_locked = parent_locked || node.locked;

        rows.push(OutlineRow {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            depth,
            has_children: !node.children.is_empty(),
            expanded: node.expanded,
            selected: selection.is_selected(node.id.as_str()),
            visible: node.visible,
            locked: node.locked,
            effectively_visible,
            effectively_locked,
        });

        if node.expanded {
            collect_rows(
                &node.children,
                selection,
                depth + 1,
                effectively_visible,
                effectively_locked,
                rows,
            );
        }
    }
}

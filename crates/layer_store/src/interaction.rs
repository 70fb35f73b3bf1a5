//! Mapping of pointer, keyboard, and context menu input to store operations

use crate::{LayersStore, SidebarStore};
use layer_model::{is_effectively_locked, LayerNode};
use serde::{Deserialize, Serialize};

/// Modifier keys held during an input event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Keys the layers panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Backslash,
}

/// Handle a pointer press on a layer row.
///
/// Ctrl or Meta toggles the layer, Shift extends a range from the focus
/// anchor, and a plain press selects only this layer. Presses on locked
/// layers (including layers under a locked ancestor) are ignored. Returns
/// whether the selection was touched.
pub fn pointer_down(layers: &mut LayersStore, id: &str, modifiers: Modifiers) -> bool {
    if layers
        .current_layers()
        .is_some_and(|nodes| is_effectively_locked(nodes, id))
    {
        tracing::trace!(layer = id, "ignored press on locked layer");
        return false;
    }

    if modifiers.ctrl || modifiers.meta {
        layers.multi_select(id);
    } else if modifiers.shift {
        layers.range_select(id);
    } else {
        layers.select_node(id);
    }
    true
}

/// Handle a key press in the layers panel. Returns whether anything changed.
///
/// Escape clears the selection and Shift+\ collapses or restores the panel.
/// Arrow keys and Enter act on every selected layer that has children:
/// ArrowRight expands, ArrowLeft collapses, Enter toggles.
pub fn handle_key(layers: &mut LayersStore, key: Key, modifiers: Modifiers) -> bool {
    match key {
        Key::Escape => {
            layers.deselect_all();
            true
        }
        Key::Backslash if modifiers.shift => {
            layers.toggle_panel_collapsed();
            true
        }
        Key::Backslash => false,
        Key::ArrowLeft | Key::ArrowRight | Key::Enter => {
            let targets: Vec<_> = layers
                .selected_ids()
                .into_iter()
                .filter(|id| {
                    layers.find_layer(id.as_str()).is_some_and(|node| {
                        !node.children.is_empty()
                            && match key {
                                Key::ArrowRight => !node.expanded,
                                Key::ArrowLeft => node.expanded,
                                _ => true,
                            }
                    })
                })
                .collect();

            for id in &targets {
                layers.toggle_node_expanded(id.as_str());
            }
            !targets.is_empty()
        }
    }
}

/// Actions offered by a layer row's context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMenuAction {
    ToggleVisibility,
    ToggleLock,
    Rename,
    Delete,
    Duplicate,
}

/// One entry in a context menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    pub action: ContextMenuAction,
    pub label: String,
    pub shortcut: Option<String>,
}

impl ContextMenuItem {
    fn new(action: ContextMenuAction, label: &str) -> Self {
        Self {
            action,
            label: label.to_string(),
            shortcut: None,
        }
    }

    fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }
}

/// Build the context menu for a layer row
pub fn context_menu_items(node: &LayerNode) -> Vec<ContextMenuItem> {
    vec![
        ContextMenuItem::new(
            ContextMenuAction::ToggleVisibility,
            if node.visible { "Hide" } else { "Show" },
        ),
        ContextMenuItem::new(
            ContextMenuAction::ToggleLock,
            if node.locked { "Unlock" } else { "Lock" },
        ),
        ContextMenuItem::new(ContextMenuAction::Rename, "Rename").with_shortcut("Enter"),
        ContextMenuItem::new(ContextMenuAction::Delete, "Delete").with_shortcut("Del"),
        ContextMenuItem::new(ContextMenuAction::Duplicate, "Duplicate"),
    ]
}

/// Apply a context menu action to a layer on the current page
pub fn apply_context_action(
    layers: &mut LayersStore,
    sidebar: &mut SidebarStore,
    id: &str,
    action: ContextMenuAction,
) {
    tracing::debug!(layer = id, ?action, "context menu action");
    match action {
        ContextMenuAction::ToggleVisibility => layers.toggle_node_visibility(id),
        ContextMenuAction::ToggleLock => layers.toggle_node_lock_state(id),
        ContextMenuAction::Rename => {
            layers.select_node(id);
            sidebar.begin_rename(layers, id);
        }
        ContextMenuAction::Delete => layers.delete_node(id),
        ContextMenuAction::Duplicate => layers.duplicate_node(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_model::{LayerId, LayerKind};

    fn layers() -> LayersStore {
        let mut layers = LayersStore::new();
        layers
            .load_pages(vec![LayerNode::new("page-1", "Page 1", LayerKind::Frame).with_children(vec![
                LayerNode::new("frame", "Frame", LayerKind::Frame)
                    .expanded()
                    .with_children(vec![
                        LayerNode::new("A", "A", LayerKind::Text),
                        LayerNode::new("B", "B", LayerKind::Group).with_children(vec![
                            LayerNode::new("C", "C", LayerKind::Rectangle),
                        ]),
                        LayerNode::new("L", "Locked", LayerKind::Group)
                            .locked()
                            .with_children(vec![LayerNode::new("L1", "Inner", LayerKind::Image)]),
                    ]),
            ])])
            .unwrap();
        layers
    }

    fn selected(layers: &LayersStore) -> Vec<String> {
        layers.selected_ids().iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_pointer_modifiers() {
        let mut layers = layers();

        assert!(pointer_down(&mut layers, "A", Modifiers::default()));
        assert_eq!(selected(&layers), vec!["A"]);

        pointer_down(&mut layers, "C", Modifiers::ctrl());
        assert_eq!(selected(&layers), vec!["A", "C"]);

        pointer_down(&mut layers, "A", Modifiers { meta: true, ..Modifiers::default() });
        assert_eq!(selected(&layers), vec!["C"]);

        pointer_down(&mut layers, "C", Modifiers::shift());
        assert_eq!(selected(&layers), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_pointer_ignores_locked_layers() {
        let mut layers = layers();
        layers.select_node("A");

        assert!(!pointer_down(&mut layers, "L", Modifiers::default()));
        assert!(!pointer_down(&mut layers, "L1", Modifiers::ctrl()));
        assert_eq!(selected(&layers), vec!["A"]);
    }

    #[test]
    fn test_arrow_keys_expand_and_collapse_selected_parents() {
        let mut layers = layers();
        layers.select_node("B");

        assert!(!handle_key(&mut layers, Key::ArrowLeft, Modifiers::default()));
        assert!(handle_key(&mut layers, Key::ArrowRight, Modifiers::default()));
        assert!(layers.find_layer("B").unwrap().expanded);
        assert!(!handle_key(&mut layers, Key::ArrowRight, Modifiers::default()));

        assert!(handle_key(&mut layers, Key::Enter, Modifiers::default()));
        assert!(!layers.find_layer("B").unwrap().expanded);
    }

    #[test]
    fn test_keys_ignore_leaves() {
        let mut layers = layers();
        layers.select_node("A");
        assert!(!handle_key(&mut layers, Key::Enter, Modifiers::default()));
    }

    #[test]
    fn test_escape_and_panel_toggle() {
        let mut layers = layers();
        layers.select_node("A");

        assert!(handle_key(&mut layers, Key::Escape, Modifiers::default()));
        assert!(layers.selected_ids().is_empty());

        assert!(!handle_key(&mut layers, Key::Backslash, Modifiers::default()));
        assert!(!layers.is_panel_collapsed());
        assert!(handle_key(&mut layers, Key::Backslash, Modifiers::shift()));
        assert!(layers.is_panel_collapsed());
    }

    #[test]
    fn test_context_menu_labels_follow_flags() {
        let node = LayerNode::new("A", "A", LayerKind::Text).hidden().locked();
        let items = context_menu_items(&node);

        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Show", "Unlock", "Rename", "Delete", "Duplicate"]);
        assert_eq!(items[3].shortcut.as_deref(), Some("Del"));
    }

    #[test]
    fn test_apply_context_actions() {
        let mut layers = layers();
        let mut sidebar = SidebarStore::new();

        apply_context_action(&mut layers, &mut sidebar, "B", ContextMenuAction::ToggleVisibility);
        assert!(!layers.find_layer("C").unwrap().visible);

        apply_context_action(&mut layers, &mut sidebar, "A", ContextMenuAction::Rename);
        assert_eq!(sidebar.renaming_id().map(LayerId::as_str), Some("A"));
        assert!(layers.is_selected("A"));

        apply_context_action(&mut layers, &mut sidebar, "A", ContextMenuAction::Duplicate);
        assert_eq!(layers.find_layer("frame").unwrap().children.len(), 4);

        apply_context_action(&mut layers, &mut sidebar, "B", ContextMenuAction::Delete);
        assert!(layers.find_layer("B").is_none());

        apply_context_action(&mut layers, &mut sidebar, "L", ContextMenuAction::ToggleLock);
        assert!(!layers.find_layer("L").unwrap().locked);
    }
}

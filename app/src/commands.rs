//! Commands sent by the layers UI
//!
//! The UI sends one [`LayerCommand`] per user action and receives a
//! [`CommandResponse`] snapshot to re-render from. Commands never fail:
//! stale or unknown ids leave the state untouched.

use crate::state::AppState;
use layer_model::LayerId;
use layer_store::{
    apply_context_action, context_menu_items, handle_key, outline_rows, pointer_down,
    ContextMenuAction, ContextMenuItem, Key, Modifiers, OutlineRow,
};
use serde::{Deserialize, Serialize};

/// A single UI action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LayerCommand {
    /// Return the current state without changing it
    Snapshot,
    SetCurrentPage { page_id: String },
    SelectNode { id: String },
    MultiSelect { id: String },
    RangeSelect { id: String },
    DeselectAll,
    PointerDown {
        id: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    ToggleExpanded { id: String },
    CollapseAll,
    ExpandAll,
    ToggleVisibility { id: String },
    ToggleLock { id: String },
    DeleteNode { id: String },
    DuplicateNode { id: String },
    BeginRename { id: String },
    CommitRename { name: String },
    CancelRename,
    ContextMenu { id: String },
    ContextAction { id: String, action: ContextMenuAction },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SetZoom { zoom: f32 },
    SetSidebarWidth { width: f32 },
    SetPanelWidth { width: f32 },
    TogglePanel,
}

/// Page entry for the pages list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: LayerId,
    pub name: String,
}

/// State snapshot returned after every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub pages: Vec<PageSummary>,
    pub current_page_id: Option<LayerId>,
    pub rows: Vec<OutlineRow>,
    pub selected_ids: Vec<LayerId>,
    pub focused_id: Option<LayerId>,
    pub renaming_id: Option<LayerId>,
    pub zoom_percent: u32,
    pub sidebar_width: f32,
    pub panel_width: f32,
    pub panel_collapsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_menu: Option<Vec<ContextMenuItem>>,
}

/// Apply a command to the state and return the resulting snapshot
pub fn dispatch(state: &mut AppState, command: LayerCommand) -> CommandResponse {
    tracing::debug!(?command, "dispatch");
    let mut context_menu = None;

    match command {
        LayerCommand::Snapshot => {}
        LayerCommand::SetCurrentPage { page_id } => {
            state.sidebar.set_active_page(&mut state.layers, &page_id);
        }
        LayerCommand::SelectNode { id } => state.layers.select_node(&id),
        LayerCommand::MultiSelect { id } => state.layers.multi_select(&id),
        LayerCommand::RangeSelect { id } => state.layers.range_select(&id),
        LayerCommand::DeselectAll => state.layers.deselect_all(),
        LayerCommand::PointerDown { id, modifiers } => {
            pointer_down(&mut state.layers, &id, modifiers);
        }
        LayerCommand::KeyDown { key, modifiers } => {
            handle_key(&mut state.layers, key, modifiers);
        }
        LayerCommand::ToggleExpanded { id } => {
            state.sidebar.toggle_layer_expanded(&mut state.layers, &id);
        }
        LayerCommand::CollapseAll => state.layers.collapse_all(),
        LayerCommand::ExpandAll => state.layers.expand_all(),
        LayerCommand::ToggleVisibility { id } => state.layers.toggle_node_visibility(&id),
        LayerCommand::ToggleLock { id } => state.layers.toggle_node_lock_state(&id),
        LayerCommand::DeleteNode { id } => state.layers.delete_node(&id),
        LayerCommand::DuplicateNode { id } => state.layers.duplicate_node(&id),
        LayerCommand::BeginRename { id } => state.sidebar.begin_rename(&state.layers, &id),
        LayerCommand::CommitRename { name } => {
            state.sidebar.commit_rename(&mut state.layers, &name);
        }
        LayerCommand::CancelRename => state.sidebar.cancel_rename(),
        LayerCommand::ContextMenu { id } => {
            context_menu = state.layers.find_layer(&id).map(context_menu_items);
        }
        LayerCommand::ContextAction { id, action } => {
            apply_context_action(&mut state.layers, &mut state.sidebar, &id, action);
        }
        LayerCommand::ZoomIn => state.zoom.zoom_in(),
        LayerCommand::ZoomOut => state.zoom.zoom_out(),
        LayerCommand::ResetZoom => state.zoom.reset(),
        LayerCommand::SetZoom { zoom } => state.zoom.set_zoom(zoom),
        LayerCommand::SetSidebarWidth { width } => state.sidebar.set_width(width),
        LayerCommand::SetPanelWidth { width } => state.layers.set_collapsed_panel_width(width),
        LayerCommand::TogglePanel => state.layers.toggle_panel_collapsed(),
    }

    let mut response = snapshot(state);
    response.context_menu = context_menu;
    response
}

/// Build a snapshot of the current state
pub fn snapshot(state: &AppState) -> CommandResponse {
    let layers = &state.layers;
    let rows = layers
        .current_layers()
        .map(|nodes| outline_rows(nodes, layers.selection()))
        .unwrap_or_default();

    CommandResponse {
        pages: layers
            .pages()
            .iter()
            .map(|p| PageSummary {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect(),
        current_page_id: layers.current_page_id().cloned(),
        rows,
        selected_ids: layers.selected_ids(),
        focused_id: layers.focused_id().cloned(),
        renaming_id: state.sidebar.renaming_id().cloned(),
        zoom_percent: state.zoom.percent(),
        sidebar_width: state.sidebar.width(),
        panel_width: layers.collapsed_panel_width(),
        panel_collapsed: layers.is_panel_collapsed(),
        context_menu: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_pages;

    fn state() -> AppState {
        let mut state = AppState::default();
        state.load_document(demo_pages()).unwrap();
        state
    }

    fn run(state: &mut AppState, json: &str) -> CommandResponse {
        let command: LayerCommand = serde_json::from_str(json).unwrap();
        dispatch(state, command)
    }

    fn row_ids(response: &CommandResponse) -> Vec<String> {
        response.rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_snapshot_of_demo_document() {
        let mut state = state();
        let response = run(&mut state, r#"{"command": "snapshot"}"#);

        assert_eq!(response.pages.len(), 2);
        assert_eq!(response.current_page_id.as_ref().map(LayerId::as_str), Some("page-1"));
        // Feature cards are collapsed, so their children are not rows
        assert!(row_ids(&response).contains(&"group-feature-1".to_string()));
        assert!(!row_ids(&response).contains(&"rect-bg".to_string()));
        assert_eq!(response.zoom_percent, 100);
        assert!(response.context_menu.is_none());
    }

    #[test]
    fn test_range_select_through_commands() {
        let mut state = state();
        run(&mut state, r#"{"command": "select_node", "id": "text-title"}"#);
        let response = run(
            &mut state,
            r#"{"command": "pointer_down", "id": "component-button", "modifiers": {"shift": true}}"#,
        );

        let selected: Vec<_> = response.selected_ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(selected, vec!["component-button", "text-subtitle", "text-title"]);
        assert_eq!(response.focused_id.as_ref().map(LayerId::as_str), Some("component-button"));
    }

    #[test]
    fn test_switching_pages_clears_selection() {
        let mut state = state();
        run(&mut state, r#"{"command": "select_node", "id": "text-title"}"#);
        let response = run(&mut state, r#"{"command": "set_current_page", "page_id": "page-2"}"#);

        assert!(response.selected_ids.is_empty());
        assert_eq!(row_ids(&response)[0], "component-btn-primary");
    }

    #[test]
    fn test_context_menu_and_action() {
        let mut state = state();
        let response = run(&mut state, r#"{"command": "context_menu", "id": "image-banner"}"#);
        let menu = response.context_menu.unwrap();
        assert_eq!(menu[1].label, "Unlock");

        let response = run(
            &mut state,
            r#"{"command": "context_action", "id": "image-banner", "action": "toggle_lock"}"#,
        );
        let banner = response.rows.iter().find(|r| r.id == "image-banner").unwrap();
        assert!(!banner.locked);

        let response = run(&mut state, r#"{"command": "context_menu", "id": "missing"}"#);
        assert!(response.context_menu.is_none());
    }

    #[test]
    fn test_rename_flow() {
        let mut state = state();
        run(&mut state, r#"{"command": "begin_rename", "id": "group-links"}"#);
        let response = run(&mut state, r#"{"command": "commit_rename", "name": "Footer Links"}"#);

        let row = response.rows.iter().find(|r| r.id == "group-links").unwrap();
        assert_eq!(row.name, "Footer Links");
        assert!(response.renaming_id.is_none());
    }

    #[test]
    fn test_duplicate_and_delete() {
        let mut state = state();
        let response = run(&mut state, r#"{"command": "duplicate_node", "id": "frame-footer"}"#);
        let footers = response.rows.iter().filter(|r| r.name == "Footer").count();
        assert_eq!(footers, 2);

        let response = run(&mut state, r#"{"command": "delete_node", "id": "frame-hero"}"#);
        assert!(!row_ids(&response).contains(&"text-title".to_string()));
    }

    #[test]
    fn test_view_commands() {
        let mut state = state();
        run(&mut state, r#"{"command": "zoom_in"}"#);
        let response = run(&mut state, r#"{"command": "set_sidebar_width", "width": 9999}"#);
        assert_eq!(response.zoom_percent, 120);
        assert_eq!(response.sidebar_width, 360.0);

        let response = run(&mut state, r#"{"command": "key_down", "key": "backslash", "modifiers": {"shift": true}}"#);
        assert!(response.panel_collapsed);

        let response = run(&mut state, r#"{"command": "set_panel_width", "width": 10}"#);
        assert_eq!(response.panel_width, 200.0);
    }

    #[test]
    fn test_hidden_layers_are_dimmed() {
        let mut state = state();
        run(&mut state, r#"{"command": "expand_all"}"#);
        let response = run(&mut state, r#"{"command": "toggle_visibility", "id": "frame-features"}"#);

        let rect = response.rows.iter().find(|r| r.id == "rect-bg").unwrap();
        assert!(!rect.visible);
        assert!(!rect.effectively_visible);
    }
}

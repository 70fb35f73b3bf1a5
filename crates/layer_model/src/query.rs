//! Read-only queries over a layer forest
//!
//! Every function takes the ordered roots of a forest (usually a page's
//! children) and borrows from it. Traversals are depth-first pre-order, which
//! is also the order the layer tree view renders rows in.

use crate::{LayerId, LayerNode};

/// Find a node by ID, returning the first pre-order match
pub fn find_node_by_id<'a>(nodes: &'a [LayerNode], id: &str) -> Option<&'a LayerNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Find the node whose `children` contains `target_id`.
///
/// Returns `None` when the target is one of the roots or is not present.
pub fn find_parent_node<'a>(nodes: &'a [LayerNode], target_id: &str) -> Option<&'a LayerNode> {
    fn search<'a>(
        nodes: &'a [LayerNode],
        target_id: &str,
        parent: Option<&'a LayerNode>,
    ) -> Option<Option<&'a LayerNode>> {
        for node in nodes {
            if node.id == target_id {
                return Some(parent);
            }
            if let Some(found) = search(&node.children, target_id, Some(node)) {
                return Some(found);
            }
        }
        None
    }

    search(nodes, target_id, None).flatten()
}

/// Get every node strictly below `node`, in pre-order
pub fn get_descendants(node: &LayerNode) -> Vec<&LayerNode> {
    flatten_tree(&node.children)
}

/// Get the ancestors of a node, ordered from its root down to its parent.
///
/// Empty when the target is a root or is not present.
pub fn get_ancestors<'a>(nodes: &'a [LayerNode], target_id: &str) -> Vec<&'a LayerNode> {
    fn find_path<'a>(nodes: &'a [LayerNode], target_id: &str, path: &mut Vec<&'a LayerNode>) -> bool {
        for node in nodes {
            if node.id == target_id {
                return true;
            }
            path.push(node);
            if find_path(&node.children, target_id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if find_path(nodes, target_id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

/// Get the depth of a node; roots are at depth 0
pub fn get_node_depth(nodes: &[LayerNode], target_id: &str) -> Option<usize> {
    for node in nodes {
        if node.id == target_id {
            return Some(0);
        }
        if let Some(depth) = get_node_depth(&node.children, target_id) {
            return Some(depth + 1);
        }
    }
    None
}

/// Get every node whose own flag and all ancestor flags are visible
pub fn get_visible_layers(nodes: &[LayerNode]) -> Vec<&LayerNode> {
    fn traverse<'a>(nodes: &'a [LayerNode], parent_visible: bool, out: &mut Vec<&'a LayerNode>) {
        for node in nodes {
            let visible = parent_visible && node.visible;
            if visible {
                out.push(node);
            }
            traverse(&node.children, visible, out);
        }
    }

    let mut visible = Vec::new();
    traverse(nodes, true, &mut visible);
    visible
}

/// Get every node that is effectively visible and effectively unlocked
pub fn get_selectable_layers(nodes: &[LayerNode]) -> Vec<&LayerNode> {
    fn traverse<'a>(
        nodes: &'a [LayerNode],
        parent_locked: bool,
        parent_visible: bool,
        out: &mut Vec<&'a LayerNode>,
    ) {
        for node in nodes {
            let locked = parent_locked || node.locked;
            let visible = parent_visible && node.visible;
            if visible && !locked {
                out.push(node);
            }
            traverse(&node.children, locked, visible, out);
        }
    }

    let mut selectable = Vec::new();
    traverse(nodes, false, true, &mut selectable);
    selectable
}

/// Whether a node and all its ancestors are visible.
///
/// `false` when the node is not present.
pub fn is_effectively_visible(nodes: &[LayerNode], id: &str) -> bool {
    match find_node_by_id(nodes, id) {
        Some(node) => node.visible && get_ancestors(nodes, id).iter().all(|a| a.visible),
        None => false,
    }
}

/// Whether a node or any of its ancestors is locked.
///
/// `false` when the node is not present.
pub fn is_effectively_locked(nodes: &[LayerNode], id: &str) -> bool {
    match find_node_by_id(nodes, id) {
        Some(node) => node.locked || get_ancestors(nodes, id).iter().any(|a| a.locked),
        None => false,
    }
}

/// Linearize the forest in pre-order.
///
/// Collapsed nodes still contribute their children; the `expanded` flag only
/// affects display.
pub fn flatten_tree(nodes: &[LayerNode]) -> Vec<&LayerNode> {
    fn traverse<'a>(nodes: &'a [LayerNode], out: &mut Vec<&'a LayerNode>) {
        for node in nodes {
            out.push(node);
            traverse(&node.children, out);
        }
    }

    let mut flattened = Vec::new();
    traverse(nodes, &mut flattened);
    flattened
}

/// Get the ids between two nodes (inclusive) in flattened order.
///
/// The endpoints may be given in either order. Returns an empty list when
/// either id is not present.
pub fn get_layers_between(nodes: &[LayerNode], start_id: &str, end_id: &str) -> Vec<LayerId> {
    let flattened = flatten_tree(nodes);
    let start = flattened.iter().position(|n| n.id == start_id);
    let end = flattened.iter().position(|n| n.id == end_id);

    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };

    let (min, max) = if start <= end { (start, end) } else { (end, start) };
    flattened[min..=max].iter().map(|n| n.id.clone()).collect()
}

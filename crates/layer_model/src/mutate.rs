//! Copy-on-write mutations over a layer forest
//!
//! Each function returns a new forest with the change applied. Nodes on the
//! path from a root to the target are rebuilt; everything else is copied by
//! value. When the target id is not present the result equals the input.

use crate::{flatten_tree, generate_id, LayerId, LayerNode};
use std::collections::HashSet;

/// Rebuild a node with new children, copying every other field
fn rebuild(node: &LayerNode, children: Vec<LayerNode>) -> LayerNode {
    LayerNode {
        id: node.id.clone(),
        name: node.name.clone(),
        kind: node.kind,
        visible: node.visible,
        locked: node.locked,
        expanded: node.expanded,
        children,
        parent: node.parent.clone(),
    }
}

/// Replace every node matching `id` with `update(node)`
fn map_node<F>(nodes: &[LayerNode], id: &str, update: &F) -> Vec<LayerNode>
where
    F: Fn(&LayerNode) -> LayerNode,
{
    nodes
        .iter()
        .map(|node| {
            if node.id == id {
                update(node)
            } else {
                rebuild(node, map_node(&node.children, id, update))
            }
        })
        .collect()
}

/// Apply `update` to every node in the forest
fn map_all<F>(nodes: &[LayerNode], update: &F) -> Vec<LayerNode>
where
    F: Fn(&mut LayerNode),
{
    nodes
        .iter()
        .map(|node| {
            let mut updated = rebuild(node, map_all(&node.children, update));
            update(&mut updated);
            updated
        })
        .collect()
}

/// Flip the `expanded` flag of a node; descendants are untouched
pub fn toggle_node_expanded(nodes: &[LayerNode], id: &str) -> Vec<LayerNode> {
    map_node(nodes, id, &|node: &LayerNode| LayerNode {
        expanded: !node.expanded,
        ..node.clone()
    })
}

/// Set the `visible` flag of a node.
///
/// With `cascade`, every descendant's flag is overwritten with the same value.
pub fn update_node_visibility(
    nodes: &[LayerNode],
    id: &str,
    visible: bool,
    cascade: bool,
) -> Vec<LayerNode> {
    map_node(nodes, id, &|node: &LayerNode| {
        let children = if cascade {
            map_all(&node.children, &|n: &mut LayerNode| n.visible = visible)
        } else {
            node.children.clone()
        };
        LayerNode {
            visible,
            ..rebuild(node, children)
        }
    })
}

/// Set the `locked` flag of a node only
pub fn update_node_lock_state(nodes: &[LayerNode], id: &str, locked: bool) -> Vec<LayerNode> {
    map_node(nodes, id, &|node: &LayerNode| LayerNode {
        locked,
        ..node.clone()
    })
}

/// Set the display name of a node
pub fn rename_node(nodes: &[LayerNode], id: &str, name: &str) -> Vec<LayerNode> {
    map_node(nodes, id, &|node: &LayerNode| LayerNode {
        name: name.to_string(),
        ..node.clone()
    })
}

/// Collapse every node in the forest
pub fn collapse_all(nodes: &[LayerNode]) -> Vec<LayerNode> {
    map_all(nodes, &|node: &mut LayerNode| node.expanded = false)
}

/// Expand every node in the forest
pub fn expand_all(nodes: &[LayerNode]) -> Vec<LayerNode> {
    map_all(nodes, &|node: &mut LayerNode| node.expanded = true)
}

/// Remove a node and its whole subtree from wherever it occurs
pub fn delete_node(nodes: &[LayerNode], id: &str) -> Vec<LayerNode> {
    nodes
        .iter()
        .filter(|node| node.id != id)
        .map(|node| rebuild(node, delete_node(&node.children, id)))
        .collect()
}

/// Insert a copy of a node directly after it in its sibling list.
///
/// The copy and each of its descendants receive freshly minted ids that do
/// not collide with any id already in the forest. Descendants of the copy
/// point at their copied parent; the copy itself keeps the original's parent.
pub fn duplicate_node(nodes: &[LayerNode], id: &str) -> Vec<LayerNode> {
    let mut taken: HashSet<LayerId> = flatten_tree(nodes).into_iter().map(|n| n.id.clone()).collect();
    duplicate_in(nodes, id, &mut taken)
}

fn duplicate_in(nodes: &[LayerNode], id: &str, taken: &mut HashSet<LayerId>) -> Vec<LayerNode> {
    let mut result = Vec::with_capacity(nodes.len() + 1);

    for node in nodes {
        if node.id == id {
            result.push(node.clone());
            result.push(clone_with_new_ids(node, node.parent.clone(), taken));
        } else {
            result.push(rebuild(node, duplicate_in(&node.children, id, taken)));
        }
    }

    result
}

fn clone_with_new_ids(
    node: &LayerNode,
    parent: Option<LayerId>,
    taken: &mut HashSet<LayerId>,
) -> LayerNode {
    let id = mint_unique_id(&node.id, taken);
    let children = node
        .children
        .iter()
        .map(|child| clone_with_new_ids(child, Some(id.clone()), taken))
        .collect();

    LayerNode {
        id,
        parent,
        ..rebuild(node, children)
    }
}

fn mint_unique_id(base: &LayerId, taken: &mut HashSet<LayerId>) -> LayerId {
    loop {
        let id = generate_id(base.as_str());
        if taken.insert(id.clone()) {
            return id;
        }
    }
}

//! Document-level checks over an ordered list of pages

use crate::{LayerId, LayerModelError, LayerNode, Page, Result};
use std::collections::HashSet;

/// Check the structural invariants of a document.
///
/// Every page must be parentless, ids must be unique within each page's
/// subtree, and any recorded `parent` must name the owning node. The first
/// violation found in pre-order is reported.
pub fn validate_pages(pages: &[Page]) -> Result<()> {
    for page in pages {
        if page.parent.is_some() {
            return Err(LayerModelError::PageHasParent(page.id.clone()));
        }

        let mut seen = HashSet::new();
        seen.insert(page.id.clone());
        validate_children(page, &page.id, &mut seen)?;
    }
    Ok(())
}

fn validate_children(owner: &LayerNode, page_id: &LayerId, seen: &mut HashSet<LayerId>) -> Result<()> {
    for child in &owner.children {
        if !seen.insert(child.id.clone()) {
            return Err(LayerModelError::DuplicateId {
                page: page_id.clone(),
                id: child.id.clone(),
            });
        }

        if let Some(recorded) = &child.parent {
            if recorded != &owner.id {
                return Err(LayerModelError::ParentMismatch {
                    id: child.id.clone(),
                    owner: owner.id.clone(),
                    recorded: Some(recorded.clone()),
                });
            }
        }

        validate_children(child, page_id, seen)?;
    }
    Ok(())
}

/// Fill every `parent` back-reference from ownership; pages get `None`
pub fn link_parents(pages: Vec<Page>) -> Vec<Page> {
    fn link(mut node: LayerNode, parent: Option<LayerId>) -> LayerNode {
        node.parent = parent;
        let id = node.id.clone();
        node.children = node
            .children
            .into_iter()
            .map(|child| link(child, Some(id.clone())))
            .collect();
        node
    }

    pages.into_iter().map(|page| link(page, None)).collect()
}

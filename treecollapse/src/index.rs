//! Tree index built from the flat row sequence.

use std::collections::HashMap;

use rowdom::{closest, query_class, Element};

use crate::classes::TOGGLE;
use crate::error::TreeError;
use crate::node::{toggle_depth, toggle_pk, Pk, TreeNode, MAX_TREE_DEPTH};

/// A toggle-bearing row as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRow {
    pub pk: Pk,
    pub depth: usize,
    /// Id of the enclosing `tr`.
    pub row: String,
    /// Id of the toggle element.
    pub toggle: String,
}

impl ToggleRow {
    /// Read a toggle's attributes and locate its row inside `container`.
    pub fn from_toggle(container: &Element, toggle: &Element) -> Result<Self, TreeError> {
        let pk = toggle_pk(toggle)?;
        let depth = toggle_depth(toggle)?;
        let row = closest(container, &toggle.id, |el| el.is("tr"))
            .ok_or_else(|| TreeError::Detached(toggle.id.clone()))?;

        Ok(Self {
            pk,
            depth,
            row: row.id.clone(),
            toggle: toggle.id.clone(),
        })
    }
}

/// Collect the toggle rows under `container` in document order.
///
/// Toggles with malformed markup are logged and skipped.
pub fn scan_toggles(container: &Element) -> Vec<ToggleRow> {
    query_class(container, TOGGLE)
        .into_iter()
        .filter_map(|toggle| match ToggleRow::from_toggle(container, toggle) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Skipping toggle: {e}");
                None
            }
        })
        .collect()
}

/// Mapping from record pk to its node, plus the document order of the nodes.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    nodes: HashMap<Pk, TreeNode>,
    order: Vec<Pk>,
}

impl TreeIndex {
    /// Rebuild the tree from rows in document order.
    ///
    /// `parents[d]` holds the most recent node seen at depth `d`. A node at
    /// depth `d > 0` becomes a child of `parents[d - 1]` when that entry is
    /// set, and an orphan otherwise (its parent is on another page). Entries
    /// deeper than the current node are closed off so they can never adopt a
    /// later row.
    ///
    /// A pk seen twice keeps its first row; the later one is dropped, as is a
    /// row deeper than [`MAX_TREE_DEPTH`].
    pub fn build(rows: impl IntoIterator<Item = ToggleRow>) -> Self {
        let mut index = Self::default();
        let mut parents: Vec<Option<Pk>> = Vec::new();

        for row in rows {
            if index.nodes.contains_key(&row.pk) {
                log::warn!("Duplicate tree node pk {} in row {}, skipping", row.pk, row.row);
                continue;
            }

            let depth = row.depth;
            if depth > MAX_TREE_DEPTH {
                log::warn!("Tree node {} has depth {depth} beyond {MAX_TREE_DEPTH}, skipping", row.pk);
                continue;
            }
            parents.resize(depth + 1, None);

            let parent = if depth > 0 { parents[depth - 1] } else { None };
            parents[depth] = Some(row.pk);

            match parent {
                Some(parent_pk) => {
                    if let Some(parent_node) = index.nodes.get_mut(&parent_pk) {
                        parent_node.children.push(row.pk);
                    }
                }
                None if depth > 0 => {
                    log::debug!(
                        "Tree node {} at depth {} has no parent on this page",
                        row.pk,
                        depth
                    );
                }
                None => {}
            }

            index.order.push(row.pk);
            index.nodes.insert(
                row.pk,
                TreeNode {
                    id: row.pk,
                    depth,
                    children: Vec::new(),
                    parent,
                    row: row.row,
                    toggle: row.toggle,
                },
            );
        }

        log::debug!("Indexed {} tree nodes", index.order.len());
        index
    }

    /// Scan `container` and build the index from its toggles.
    pub fn from_container(container: &Element) -> Self {
        Self::build(scan_toggles(container))
    }

    pub fn get(&self, pk: Pk) -> Option<&TreeNode> {
        self.nodes.get(&pk)
    }

    pub fn contains(&self, pk: Pk) -> bool {
        self.nodes.contains_key(&pk)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.order.iter().filter_map(|pk| self.nodes.get(pk))
    }

    /// Nodes without a parent on this page, in document order.
    pub fn roots(&self) -> impl Iterator<Item = &TreeNode> {
        self.iter().filter(|node| node.parent.is_none())
    }

    /// Children pks of `pk`; empty for unknown pks.
    pub fn children(&self, pk: Pk) -> &[Pk] {
        self.nodes
            .get(&pk)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(Pk, usize)]) -> Vec<ToggleRow> {
        pairs
            .iter()
            .map(|&(pk, depth)| ToggleRow {
                pk,
                depth,
                row: format!("row-{pk}"),
                toggle: format!("toggle-{pk}"),
            })
            .collect()
    }

    #[test]
    fn depth_jump_does_not_reuse_closed_parent() {
        // 5 sits at depth 2 after the depth-1 entry was closed by root 4.
        let index = TreeIndex::build(rows(&[(1, 0), (2, 1), (3, 2), (4, 0), (5, 2)]));
        assert_eq!(index.children(2), &[3]);
        assert!(index.get(5).unwrap().is_orphan());
    }

    #[test]
    fn duplicate_pk_keeps_first_row() {
        let index = TreeIndex::build(rows(&[(1, 0), (1, 1), (2, 1)]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(1).unwrap().depth, 0);
        assert_eq!(index.children(1), &[2]);
    }

    #[test]
    fn rows_beyond_depth_limit_are_dropped() {
        let index = TreeIndex::build(rows(&[(1, 0), (2, usize::MAX), (3, 1)]));
        assert_eq!(index.len(), 2);
        assert!(!index.contains(2));
        assert_eq!(index.children(1), &[3]);
    }
}

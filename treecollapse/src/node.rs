//! Tree node records.

use rowdom::Element;

use crate::classes::{DATA_PK, DATA_TREE_DEPTH};
use crate::error::TreeError;

/// Primary key of a changelist record.
pub type Pk = i64;

/// Deepest tree level accepted from markup. Anything deeper is treated as
/// malformed.
pub const MAX_TREE_DEPTH: usize = 1024;

/// One row of the changelist that carries a toggle.
///
/// `row` and `toggle` are element ids; the document owns the elements and the
/// node only refers to them. Whether the node is collapsed is not stored
/// here: the toggle's `collapsed` class is the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: Pk,
    /// Depth in the tree as rendered (0 = root).
    pub depth: usize,
    /// Direct children, in document order.
    pub children: Vec<Pk>,
    /// Parent on the current page. `None` for roots and for orphans whose
    /// parent row is on another page.
    pub parent: Option<Pk>,
    pub row: String,
    pub toggle: String,
}

impl TreeNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// A node below depth 0 whose parent is not on this page.
    pub fn is_orphan(&self) -> bool {
        self.depth > 0 && self.parent.is_none()
    }
}

/// Read the record's primary key from a toggle.
pub fn toggle_pk(toggle: &Element) -> Result<Pk, TreeError> {
    parse_data(toggle, DATA_PK)
}

/// Read the tree depth from a toggle. Depths beyond [`MAX_TREE_DEPTH`] are
/// rejected as invalid.
pub fn toggle_depth(toggle: &Element) -> Result<usize, TreeError> {
    let depth: usize = parse_data(toggle, DATA_TREE_DEPTH)?;
    if depth > MAX_TREE_DEPTH {
        return Err(TreeError::InvalidAttribute {
            element: toggle.id.clone(),
            attribute: DATA_TREE_DEPTH,
            value: depth.to_string(),
        });
    }
    Ok(depth)
}

fn parse_data<T: std::str::FromStr>(el: &Element, attribute: &'static str) -> Result<T, TreeError> {
    let value = el
        .get_data(attribute)
        .ok_or_else(|| TreeError::MissingAttribute {
            element: el.id.clone(),
            attribute,
        })?;

    value
        .trim()
        .parse()
        .map_err(|_| TreeError::InvalidAttribute {
            element: el.id.clone(),
            attribute,
            value: value.clone(),
        })
}

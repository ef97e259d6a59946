//! Initial collapse state.

use rowdom::Element;

use crate::collapser::TreeCollapser;
use crate::error::TreeError;

impl TreeCollapser {
    /// Collapse every node at `min_depth` or deeper that has children.
    /// Returns how many nodes were collapsed.
    ///
    /// Collapsing only ever hides rows, so the order in which nodes are
    /// visited does not change the result.
    pub fn initially_collapse(&self, root: &mut Element, min_depth: usize) -> Result<usize, TreeError> {
        let mut count = 0;
        for node in self.index.iter() {
            if node.depth >= min_depth && node.has_children() {
                self.set_collapsed(root, node.id, true)?;
                count += 1;
            }
        }
        Ok(count)
    }
}

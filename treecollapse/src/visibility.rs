//! Showing and hiding descendant rows.

use rowdom::Element;

use crate::classes::{COLLAPSED, HIDE};
use crate::collapser::{has_class, set_class, TreeCollapser};
use crate::context::ExpandPolicy;
use crate::error::TreeError;
use crate::node::Pk;

impl TreeCollapser {
    /// Collapse or expand the branch below `pk`.
    ///
    /// Sets the toggle indicator of `pk`, then walks the descendants: every
    /// child row is hidden or shown to match `collapsed`. Under
    /// [`ExpandPolicy::Cascade`] each descendant toggle is forced to the same
    /// state and the walk always continues; under [`ExpandPolicy::Preserve`]
    /// descendant toggles are left alone and expanding stops at children that
    /// are collapsed themselves.
    ///
    /// Idempotent. An unknown `pk` is reported before anything is changed.
    pub fn set_collapsed(&self, root: &mut Element, pk: Pk, collapsed: bool) -> Result<(), TreeError> {
        let node = self.index.get(pk).ok_or(TreeError::UnknownNode(pk))?;
        log::trace!("set_collapsed({pk}, {collapsed})");

        set_class(root, &node.toggle, COLLAPSED, collapsed);

        let mut pending = vec![pk];
        while let Some(current) = pending.pop() {
            for &child_pk in self.index.children(current) {
                let Some(child) = self.index.get(child_pk) else {
                    continue;
                };

                set_class(root, &child.row, HIDE, collapsed);

                match self.policy {
                    ExpandPolicy::Cascade => {
                        set_class(root, &child.toggle, COLLAPSED, collapsed);
                        pending.push(child_pk);
                    }
                    ExpandPolicy::Preserve => {
                        if collapsed || !has_class(root, &child.toggle, COLLAPSED) {
                            pending.push(child_pk);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Flip the state of `pk` as read from its toggle. Returns the new state.
    pub fn toggle(&self, root: &mut Element, pk: Pk) -> Result<bool, TreeError> {
        let collapsed = !self.is_collapsed(root, pk)?;
        self.set_collapsed(root, pk, collapsed)?;
        Ok(collapsed)
    }
}

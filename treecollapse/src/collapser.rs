//! Mounting the collapser on a page.

use rowdom::{find_element, find_element_mut, query_tag, Element};

use crate::classes::{COLLAPSED, HIDE, RESULT_LIST};
use crate::context::{ExpandPolicy, TreeContext};
use crate::error::TreeError;
use crate::index::TreeIndex;
use crate::node::Pk;

/// Collapse state machine for one changelist page.
///
/// Built once per page from the rendered rows and dropped with the page.
/// It holds no display state of its own: every operation reads and writes
/// classes on the document passed in, which may be the whole page or the
/// table body itself.
#[derive(Debug, Clone)]
pub struct TreeCollapser {
    /// Id of the table body the collapser was built from.
    pub(crate) container: String,
    pub(crate) index: TreeIndex,
    pub(crate) policy: ExpandPolicy,
}

impl TreeCollapser {
    /// Index the toggles under `container` and reveal the toggle of every
    /// node that has at least one child on this page.
    pub fn new(container: &mut Element, policy: ExpandPolicy) -> Self {
        let index = TreeIndex::from_container(container);

        for node in index.iter().filter(|node| node.has_children()) {
            set_class(container, &node.toggle, HIDE, false);
        }

        Self {
            container: container.id.clone(),
            index,
            policy,
        }
    }

    /// Find the changelist body in `document`, build the collapser and apply
    /// the initial collapse depth from the page context.
    ///
    /// Returns `Ok(None)` on pages without a changelist. A malformed context
    /// payload is returned as an error before anything is changed.
    pub fn mount(document: &mut Element) -> Result<Option<Self>, TreeError> {
        let Some(body_id) = find_element(document, RESULT_LIST)
            .and_then(|list| query_tag(list, "tbody").into_iter().next())
            .map(|body| body.id.clone())
        else {
            log::debug!("No #{RESULT_LIST} tbody on page, tree collapser not mounted");
            return Ok(None);
        };

        let context = TreeContext::from_document(document)?;

        let Some(body) = find_element_mut(document, &body_id) else {
            return Ok(None);
        };
        let collapser = Self::new(body, context.expand_policy);
        let collapsed = collapser.initially_collapse(body, context.initially_collapse_depth)?;

        log::debug!(
            "Tree collapser mounted on {}: {} nodes, {} collapsed from depth {}",
            body_id,
            collapser.index.len(),
            collapsed,
            context.initially_collapse_depth
        );

        Ok(Some(collapser))
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn policy(&self) -> ExpandPolicy {
        self.policy
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Whether the toggle of `pk` currently shows the collapsed indicator.
    pub fn is_collapsed(&self, root: &Element, pk: Pk) -> Result<bool, TreeError> {
        let node = self.index.get(pk).ok_or(TreeError::UnknownNode(pk))?;
        Ok(has_class(root, &node.toggle, COLLAPSED))
    }

    /// Whether the row of `pk` is currently hidden.
    pub fn is_hidden(&self, root: &Element, pk: Pk) -> Result<bool, TreeError> {
        let node = self.index.get(pk).ok_or(TreeError::UnknownNode(pk))?;
        Ok(has_class(root, &node.row, HIDE))
    }
}

/// Handles are element ids, resolved with a full tree walk on every access.
pub(crate) fn set_class(root: &mut Element, id: &str, class: &str, on: bool) {
    match find_element_mut(root, id) {
        Some(el) => {
            el.toggle_class(class, on);
        }
        None => log::debug!("Element {id} not in document, {class} not updated"),
    }
}

pub(crate) fn has_class(root: &Element, id: &str, class: &str) -> bool {
    find_element(root, id).is_some_and(|el| el.has_class(class))
}

//! Page context

use rowdom::{find_element, Element};
use serde::{Deserialize, Serialize};

use crate::classes::{CONTEXT, DATA_CONTEXT};
use crate::error::TreeError;

/// Depth from which branches start out collapsed when the page has no
/// context element.
pub const DEFAULT_INITIALLY_COLLAPSE_DEPTH: usize = 1;

/// How expanding a branch treats descendants that were collapsed on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandPolicy {
    /// Collapsing or expanding a node forces the same state onto every
    /// descendant, toggles included.
    #[default]
    Cascade,
    /// Descendant toggles keep their own state. Expanding a node only
    /// reveals rows whose ancestors up to that node are all expanded.
    Preserve,
}

/// Settings delivered by the page as JSON in `#feincms3-context[data-context]`.
///
/// # Example
///
/// ```
/// use treecollapse::{ExpandPolicy, TreeContext};
///
/// let context = TreeContext::from_json(r#"{"initiallyCollapseDepth": 2}"#).unwrap();
/// assert_eq!(context.initially_collapse_depth, 2);
/// assert_eq!(context.expand_policy, ExpandPolicy::Cascade);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeContext {
    /// Nodes at this depth or deeper start out collapsed.
    ///
    /// Default: 1
    pub initially_collapse_depth: usize,

    /// Default: cascade
    pub expand_policy: ExpandPolicy,
}

impl Default for TreeContext {
    fn default() -> Self {
        Self {
            initially_collapse_depth: DEFAULT_INITIALLY_COLLAPSE_DEPTH,
            expand_policy: ExpandPolicy::default(),
        }
    }
}

impl TreeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial collapse depth.
    pub fn with_initially_collapse_depth(mut self, depth: usize) -> Self {
        self.initially_collapse_depth = depth;
        self
    }

    /// Sets the expand policy.
    pub fn with_expand_policy(mut self, policy: ExpandPolicy) -> Self {
        self.expand_policy = policy;
        self
    }

    pub fn from_json(payload: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read the context element of `document`.
    ///
    /// A page without the element, or whose element has no payload, gets the
    /// defaults. A payload that is not valid JSON is an error.
    pub fn from_document(document: &Element) -> Result<Self, TreeError> {
        let Some(payload) = find_element(document, CONTEXT).and_then(|el| el.get_data(DATA_CONTEXT))
        else {
            log::debug!("No tree context on page, using defaults");
            return Ok(Self::default());
        };

        Self::from_json(payload)
    }
}

//! Class names, element ids and data attributes shared with the markup.

/// Marks the toggle control of a row.
pub const TOGGLE: &str = "collapse-toggle";

/// Set on a toggle while its branch is closed.
pub const COLLAPSED: &str = "collapsed";

/// Hides a row, or a toggle that has no children to show.
pub const HIDE: &str = "collapse-hide";

/// `data-pk` on toggles.
pub const DATA_PK: &str = "pk";

/// `data-tree-depth` on toggles.
pub const DATA_TREE_DEPTH: &str = "tree-depth";

/// Id of the element wrapping the changelist table.
pub const RESULT_LIST: &str = "result_list";

/// Id of the element carrying the JSON context.
pub const CONTEXT: &str = "feincms3-context";

/// `data-context` on the context element.
pub const DATA_CONTEXT: &str = "context";

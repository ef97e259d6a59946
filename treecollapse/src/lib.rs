//! Collapsible tree rows for paginated changelists.
//!
//! A changelist renders a tree as a flat table: every row carries a toggle
//! annotated with the record's primary key and its depth in the tree. The
//! [`TreeCollapser`] rebuilds the parent/child structure from that flat
//! sequence, collapses deep branches on mount, and flips branches open or
//! closed when a toggle is clicked.

pub mod changelist;
pub mod classes;
pub mod collapser;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod node;
pub mod policy;
pub mod visibility;

pub use changelist::{Changelist, Record};
pub use collapser::TreeCollapser;
pub use context::{ExpandPolicy, TreeContext};
pub use error::TreeError;
pub use index::{ToggleRow, TreeIndex};
pub use node::{Pk, TreeNode, MAX_TREE_DEPTH};

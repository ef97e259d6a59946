//! Changelist markup for tree records.
//!
//! Produces the rows the collapser consumes: a toggle column annotated with
//! the record's pk and depth, an indented title drawn with box-drawing
//! characters, and a plain change link.

use rowdom::Element;
use serde::{Deserialize, Serialize};

use crate::classes::{CONTEXT, DATA_CONTEXT, DATA_PK, DATA_TREE_DEPTH, HIDE, RESULT_LIST, TOGGLE};
use crate::context::TreeContext;
use crate::error::TreeError;
use crate::node::{Pk, MAX_TREE_DEPTH};

/// Continuation line for each ancestor level above the parent.
pub const LINE: &str = "│  ";

/// Branch into the record itself.
pub const BRANCH: &str = "└─ ";

/// A record of the tree as listed on one changelist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub pk: Pk,
    pub depth: usize,
    pub title: String,
}

impl Record {
    pub fn new(pk: Pk, depth: usize, title: impl Into<String>) -> Self {
        Self {
            pk,
            depth,
            title: title.into(),
        }
    }
}

/// Builder for one page of a tree changelist.
#[derive(Debug, Clone, Default)]
pub struct Changelist {
    records: Vec<Record>,
    context: TreeContext,
    ellipsize: bool,
}

impl Changelist {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Sets the context embedded by [`Changelist::document`].
    pub fn with_context(mut self, context: TreeContext) -> Self {
        self.context = context;
        self
    }

    /// Mark titles for truncation.
    pub fn ellipsize(mut self, ellipsize: bool) -> Self {
        self.ellipsize = ellipsize;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The table body: one row per record.
    pub fn body(&self) -> Element {
        Element::tbody().children(self.records.iter().map(|record| self.row(record)))
    }

    /// A full page: the changelist table inside `#result_list`, followed by
    /// the context element.
    pub fn document(&self) -> Result<Element, TreeError> {
        let context = Element::div()
            .id(CONTEXT)
            .data(DATA_CONTEXT, self.context.to_json()?);

        Ok(Element::div()
            .id("changelist")
            .child(Element::div().id(RESULT_LIST).child(Element::table().child(self.body())))
            .child(context))
    }

    fn row(&self, record: &Record) -> Element {
        Element::tr()
            .id(row_id(record.pk))
            .child(Element::td().class("field-collapse_column").child(collapse_column(record)))
            .child(
                Element::td()
                    .class("field-indented_title")
                    .child(indented_title(record, self.ellipsize)),
            )
            .child(
                Element::td().class("field-change").child(
                    Element::link("change")
                        .id(link_id(record.pk))
                        .class("changelink"),
                ),
            )
    }
}

pub fn row_id(pk: Pk) -> String {
    format!("row-{pk}")
}

pub fn toggle_id(pk: Pk) -> String {
    format!("toggle-{pk}")
}

pub fn link_id(pk: Pk) -> String {
    format!("link-{pk}")
}

/// The toggle control. It starts out hidden; the collapser reveals it once
/// the record is known to have children on the page.
pub fn collapse_column(record: &Record) -> Element {
    Element::div()
        .id(toggle_id(record.pk))
        .class(TOGGLE)
        .class(HIDE)
        .data(DATA_PK, record.pk)
        .data(DATA_TREE_DEPTH, record.depth)
}

/// Box-drawing prefix for a record at `depth`. Depths past
/// [`MAX_TREE_DEPTH`] draw as that depth.
pub fn box_drawing(depth: usize) -> String {
    let depth = depth.min(MAX_TREE_DEPTH);
    if depth == 0 {
        return String::new();
    }
    let mut prefix = LINE.repeat(depth - 1);
    prefix.push_str(BRANCH);
    prefix
}

/// Title cell content: the box-drawing glyphs followed by the title text.
pub fn indented_title(record: &Record, ellipsize: bool) -> Element {
    let glyphs = Element::div()
        .class("box-drawing")
        .child(Element::text(box_drawing(record.depth)));

    let mut text = Element::text(record.title.clone()).class("box-text");
    if ellipsize {
        text.add_class("ellipsize");
    }

    Element::div().class("box").child(glyphs).child(text)
}

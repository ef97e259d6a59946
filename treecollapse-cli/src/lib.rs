//! Replay toggle clicks against a changelist page and print the visible rows.

use std::path::{Path, PathBuf};

use clap::Parser;
use rowdom::render::render_rows_with;
use rowdom::text::display_width;
use rowdom::{query_class, text_content, Element, Event};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use treecollapse::changelist::{box_drawing, toggle_id};
use treecollapse::classes::{COLLAPSED, HIDE, TOGGLE};
use treecollapse::{
    Changelist, ExpandPolicy, Pk, Record, TreeCollapser, TreeContext, TreeError, MAX_TREE_DEPTH,
};

/// Width of the toggle marker column.
const MARKER_WIDTH: usize = 1;

/// Width of the title column when titles are ellipsized.
const TITLE_WIDTH: usize = 40;

/// Width of the change link column.
const LINK_WIDTH: usize = 6;

#[derive(Parser, Debug)]
#[command(name = "treecollapse", version, about = "Collapse tree rows of a changelist page")]
pub struct Cli {
    /// JSON file with the page's records
    pub page: PathBuf,

    /// Collapse nodes at this depth or deeper on load
    #[arg(long)]
    pub depth: Option<usize>,

    /// Keep individually collapsed branches closed when an ancestor expands
    #[arg(long)]
    pub preserve: bool,

    /// Click the toggle of this record, in order
    #[arg(long = "click", value_name = "PK")]
    pub clicks: Vec<Pk>,

    /// Truncate titles to a fixed column width
    #[arg(long)]
    pub ellipsize: bool,

    /// Log file
    #[arg(long, default_value = "treecollapse.log")]
    pub log: PathBuf,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid page file: {0}")]
    Page(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("record {pk} has depth {depth}, deeper than {max}", max = MAX_TREE_DEPTH)]
    InvalidDepth { pk: Pk, depth: usize },

    #[error("page has no changelist")]
    NotMounted,
}

/// Contents of a page file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub records: Vec<Record>,
}

impl Page {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a page, rejecting records deeper than [`MAX_TREE_DEPTH`].
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let page: Self = serde_json::from_str(json)?;
        if let Some(record) = page.records.iter().find(|r| r.depth > MAX_TREE_DEPTH) {
            return Err(CliError::InvalidDepth {
                pk: record.pk,
                depth: record.depth,
            });
        }
        Ok(page)
    }
}

impl Cli {
    pub fn context(&self) -> TreeContext {
        let mut context = TreeContext::new();
        if let Some(depth) = self.depth {
            context = context.with_initially_collapse_depth(depth);
        }
        if self.preserve {
            context = context.with_expand_policy(ExpandPolicy::Preserve);
        }
        context
    }
}

/// Build the page, mount the collapser, click each toggle in turn and
/// render the rows that remain visible.
///
/// Ellipsized titles are cut to a fixed width; otherwise the title column is
/// as wide as the widest indented title.
pub fn run(
    page: Page,
    context: TreeContext,
    clicks: &[Pk],
    ellipsize: bool,
) -> Result<Vec<String>, CliError> {
    let changelist = Changelist::new(page.records)
        .with_context(context)
        .ellipsize(ellipsize);
    let title_width = if ellipsize {
        TITLE_WIDTH
    } else {
        changelist
            .records()
            .iter()
            .map(|r| display_width(&box_drawing(r.depth)) + display_width(&r.title))
            .max()
            .unwrap_or(0)
    };
    let mut document = changelist.document()?;

    let collapser = TreeCollapser::mount(&mut document)?.ok_or(CliError::NotMounted)?;

    for &pk in clicks {
        let mut event = Event::click(toggle_id(pk));
        match collapser.handle_click(&mut document, &mut event) {
            Ok(true) => {}
            Ok(false) => log::warn!("Click on {pk} was not handled"),
            Err(e) => log::warn!("Click on {pk} failed: {e}"),
        }
    }

    let widths = [MARKER_WIDTH, title_width, LINK_WIDTH];
    Ok(render_rows_with(&document, HIDE, &widths, cell_text))
}

/// Toggle cells render as a marker; every other cell as its text.
fn cell_text(cell: &Element) -> String {
    match query_class(cell, TOGGLE).first() {
        Some(toggle) if toggle.has_class(HIDE) => String::new(),
        Some(toggle) if toggle.has_class(COLLAPSED) => "▸".to_string(),
        Some(_) => "▾".to_string(),
        None => text_content(cell),
    }
}

pub mod element;
pub mod event;
pub mod render;
pub mod text;

pub use element::{
    ancestors, closest, find_element, find_element_mut, query_class, query_tag, text_content,
    Content, Element,
};
pub use event::{Event, EventKind, MouseButton};
pub use render::{render_rows, render_rows_with};

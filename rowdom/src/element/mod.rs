mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// The chain from the element with `id` up to `root`, both inclusive.
/// Returns None if `id` is not inside `root`.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut chain) = ancestors(child, id) {
                chain.push(root);
                return Some(chain);
            }
        }
    }

    None
}

/// Nearest element, starting at `id` itself and walking up to `root`,
/// that satisfies `predicate`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    ancestors(root, id)?.into_iter().find(|el| predicate(el))
}

/// All elements carrying `class`, in document order.
pub fn query_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, &|el| el.has_class(class), &mut found);
    found
}

/// All elements with the given tag, in document order.
pub fn query_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, &|el| el.is(tag), &mut found);
    found
}

fn collect<'a>(el: &'a Element, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if predicate(el) {
        out.push(el);
    }
    for child in el.content.children() {
        collect(child, predicate, out);
    }
}

/// Concatenated text of the element and all its descendants.
pub fn text_content(el: &Element) -> String {
    match &el.content {
        Content::None => String::new(),
        Content::Text(text) => text.clone(),
        Content::Children(children) => children.iter().map(text_content).collect(),
    }
}

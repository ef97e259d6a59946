use rowdom::{find_element_mut, Element};
use treecollapse::classes::{CONTEXT, DATA_CONTEXT};
use treecollapse::{Changelist, ExpandPolicy, Pk, Record, TreeCollapser, TreeContext, TreeError};

fn changelist() -> Changelist {
    Changelist::new(
        [(1, 0), (2, 1), (3, 2), (4, 3), (5, 0)]
            .into_iter()
            .map(|(pk, depth)| Record::new(pk, depth, format!("Node {pk}"))),
    )
}

fn collapsed(root: &Element, collapser: &TreeCollapser) -> Vec<Pk> {
    collapser
        .index()
        .iter()
        .filter(|node| collapser.is_collapsed(root, node.id).unwrap())
        .map(|node| node.id)
        .collect()
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_applies_context_depth() {
    let mut page = changelist()
        .with_context(TreeContext::new().with_initially_collapse_depth(2))
        .document()
        .unwrap();

    let collapser = TreeCollapser::mount(&mut page).unwrap().expect("changelist on page");

    assert_eq!(collapser.index().len(), 5);
    assert_eq!(collapsed(&page, &collapser), vec![3]);
    assert!(collapser.is_hidden(&page, 4).unwrap());
    assert!(!collapser.is_hidden(&page, 3).unwrap());
}

#[test]
fn test_mount_default_context() {
    let mut page = changelist().document().unwrap();

    let collapser = TreeCollapser::mount(&mut page).unwrap().unwrap();

    assert_eq!(collapser.policy(), ExpandPolicy::Cascade);
    assert_eq!(collapsed(&page, &collapser), vec![2, 3]);
    for pk in [3, 4] {
        assert!(collapser.is_hidden(&page, pk).unwrap());
    }
}

#[test]
fn test_mount_without_context_element_uses_fallback() {
    let mut page = Element::div().child(
        Element::div()
            .id("result_list")
            .child(Element::table().child(changelist().body())),
    );

    let collapser = TreeCollapser::mount(&mut page).unwrap().unwrap();

    assert_eq!(collapsed(&page, &collapser), vec![2, 3]);
}

#[test]
fn test_mount_reads_expand_policy() {
    let mut page = changelist()
        .with_context(TreeContext::new().with_expand_policy(ExpandPolicy::Preserve))
        .document()
        .unwrap();

    let collapser = TreeCollapser::mount(&mut page).unwrap().unwrap();
    assert_eq!(collapser.policy(), ExpandPolicy::Preserve);
}

#[test]
fn test_mount_records_container() {
    let mut page = changelist().document().unwrap();
    let collapser = TreeCollapser::mount(&mut page).unwrap().unwrap();
    let body = find_element_mut(&mut page, collapser.container()).unwrap();
    assert!(body.is("tbody"));
}

// ============================================================================
// Pages without a tree
// ============================================================================

#[test]
fn test_mount_without_changelist_is_noop() {
    let mut page = Element::div().child(Element::link("Home"));
    let before = page.clone();

    assert!(TreeCollapser::mount(&mut page).unwrap().is_none());
    assert_eq!(page, before);
}

#[test]
fn test_mount_without_body_is_noop() {
    let mut page = Element::div().child(Element::div().id("result_list").child(Element::table()));
    assert!(TreeCollapser::mount(&mut page).unwrap().is_none());
}

#[test]
fn test_mount_with_malformed_context_fails_untouched() {
    let mut page = changelist().document().unwrap();
    find_element_mut(&mut page, CONTEXT)
        .unwrap()
        .data
        .insert(DATA_CONTEXT.to_string(), "{not json".to_string());
    let before = page.clone();

    let err = TreeCollapser::mount(&mut page).unwrap_err();

    assert!(matches!(err, TreeError::MalformedContext(_)));
    assert_eq!(page, before);
}

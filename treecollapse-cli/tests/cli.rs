use clap::Parser;
use treecollapse::{ExpandPolicy, TreeContext};
use treecollapse_cli::{run, Cli, CliError, Page};

const PAGE: &str = r#"{
    "records": [
        {"pk": 1, "depth": 0, "title": "Home"},
        {"pk": 2, "depth": 1, "title": "About"},
        {"pk": 3, "depth": 2, "title": "Team"},
        {"pk": 4, "depth": 1, "title": "Blog"},
        {"pk": 5, "depth": 0, "title": "Imprint"}
    ]
}"#;

/// (marker, title) of each rendered line.
fn cells(lines: &[String]) -> Vec<(String, String)> {
    lines
        .iter()
        .map(|line| {
            let parts: Vec<&str> = line.split(" | ").collect();
            (parts[0].trim().to_string(), parts[1].trim().to_string())
        })
        .collect()
}

fn pair(marker: &str, title: &str) -> (String, String) {
    (marker.to_string(), title.to_string())
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn test_parse_arguments() {
    let cli = Cli::try_parse_from([
        "treecollapse",
        "page.json",
        "--depth",
        "2",
        "--preserve",
        "--click",
        "1",
        "--click",
        "3",
    ])
    .unwrap();

    assert_eq!(cli.page.to_str(), Some("page.json"));
    assert_eq!(cli.clicks, vec![1, 3]);
    assert!(!cli.ellipsize);
    assert_eq!(
        cli.context(),
        TreeContext::new()
            .with_initially_collapse_depth(2)
            .with_expand_policy(ExpandPolicy::Preserve)
    );
}

#[test]
fn test_default_arguments() {
    let cli = Cli::try_parse_from(["treecollapse", "page.json"]).unwrap();
    assert!(cli.clicks.is_empty());
    assert_eq!(cli.context(), TreeContext::default());
    assert_eq!(cli.log.to_str(), Some("treecollapse.log"));
}

#[test]
fn test_page_argument_is_required() {
    assert!(Cli::try_parse_from(["treecollapse"]).is_err());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_initial_collapse_hides_deep_rows() {
    let page = Page::from_json(PAGE).unwrap();
    let lines = run(page, TreeContext::default(), &[], false).unwrap();

    assert_eq!(
        cells(&lines),
        vec![
            pair("▾", "Home"),
            pair("▸", "└─ About"),
            pair("", "└─ Blog"),
            pair("", "Imprint"),
        ]
    );
}

#[test]
fn test_clicks_are_replayed_in_order() {
    let page = Page::from_json(PAGE).unwrap();
    let lines = run(page, TreeContext::default(), &[2, 1], false).unwrap();

    assert_eq!(cells(&lines), vec![pair("▸", "Home"), pair("", "Imprint")]);

    let page = Page::from_json(PAGE).unwrap();
    let lines = run(page, TreeContext::default(), &[2], false).unwrap();
    assert_eq!(cells(&lines)[2], pair("", "│  └─ Team"));
}

#[test]
fn test_unknown_click_is_skipped() {
    let page = Page::from_json(PAGE).unwrap();
    let lines = run(page, TreeContext::new().with_initially_collapse_depth(5), &[42], false).unwrap();
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_long_titles_are_kept_whole() {
    let page = Page::from_json(
        r#"{"records": [
            {"pk": 1, "depth": 0, "title": "Root"},
            {"pk": 2, "depth": 1, "title": "A title well past the forty column ellipsis width"}
        ]}"#,
    )
    .unwrap();
    let lines = run(page, TreeContext::new().with_initially_collapse_depth(5), &[], false).unwrap();

    assert_eq!(
        cells(&lines)[1],
        pair("", "└─ A title well past the forty column ellipsis width")
    );
}

#[test]
fn test_ellipsize_truncates_titles() {
    let cli = Cli::try_parse_from(["treecollapse", "page.json", "--ellipsize"]).unwrap();
    assert!(cli.ellipsize);

    let page = Page::from_json(
        r#"{"records": [
            {"pk": 1, "depth": 0, "title": "A title well past the forty column ellipsis width"}
        ]}"#,
    )
    .unwrap();
    let lines = run(page, TreeContext::default(), &[], true).unwrap();

    let (_, title) = &cells(&lines)[0];
    assert!(title.ends_with('…'));
    assert_eq!(title.chars().count(), 40);
}

#[test]
fn test_out_of_range_depth_is_rejected() {
    let err = Page::from_json(
        r#"{"records": [
            {"pk": 1, "depth": 0, "title": "Home"},
            {"pk": 2, "depth": 18446744073709551615, "title": "Deep"}
        ]}"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::InvalidDepth { pk: 2, depth: 18446744073709551615 }
    ));
}

#[test]
fn test_invalid_page_file() {
    let err = Page::from_json(r#"{"records": [{"pk": "one"}]}"#).unwrap_err();
    assert!(matches!(err, CliError::Page(_)));
}

#[test]
fn test_missing_page_file() {
    let err = Page::load(std::path::Path::new("/nonexistent/page.json")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read /nonexistent/page.json"));
}

use next_tag::boundary::BoundaryWarning;
use next_tag::domain::Bump;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_bump_adjusted_display() {
    let warning = BoundaryWarning::BumpAdjusted {
        requested: Bump::Patch,
        effective: Bump::Minor,
    };

    let display_msg = warning.to_string();
    assert_eq!(
        display_msg,
        "Bumping minor instead of patch as format is 'majorminor'"
    );
}

#[test]
fn test_boundary_warning_unparsable_tags_display() {
    let warning = BoundaryWarning::UnparsableTags {
        tags: vec!["nightly".to_string(), "latest".to_string()],
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("2 tag(s)"),
        "Message should contain the count, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("'nightly', 'latest'"),
        "Message should list the tags, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_unparsable_tags_truncates_list() {
    let tags: Vec<String> = (0..5).map(|i| format!("docs-{}", i)).collect();
    let warning = BoundaryWarning::UnparsableTags { tags };

    let display_msg = warning.to_string();
    assert!(
        display_msg.ends_with("'docs-2' and 2 more"),
        "Message should truncate after three tags, got: {}",
        display_msg
    );
    assert!(!display_msg.contains("docs-3"));
}

#[test]
fn test_boundary_warning_no_tags_display() {
    let display_msg = BoundaryWarning::NoTagsFound.to_string();
    assert!(
        display_msg.contains("No version tags found"),
        "got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_prefix_overridden_display() {
    let warning = BoundaryWarning::PrefixOverridden {
        detected: "v".to_string(),
        configured: "release-".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("'release-'"), "got: {}", display_msg);
    assert!(display_msg.contains("'v'"), "got: {}", display_msg);
}

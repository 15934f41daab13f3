//! Tests for RebuildService: textual traversals through to trees

use retree::application::{ApplicationError, RebuildService, TokenMode};
use retree::config::Settings;
use retree::domain::{SubtreePolicy, TraversalError, ValidationError};
use retree::tree_traits::TreeNodeConvert;
use retree::util::testing;

fn service(settings: Settings) -> RebuildService {
    testing::init_test_setup();
    RebuildService::new(settings)
}

#[test]
fn given_word_traversals_when_rebuilding_then_returns_tree() {
    let service = service(Settings::default());

    let tree = service
        .rebuild("F B A D C E G I H", "A, B, C, D, E, F, G, H, I")
        .unwrap();

    let root = tree.root().unwrap();
    assert_eq!(root.value(), "F");
    assert_eq!(root.left().unwrap().value(), "B");
    assert_eq!(root.right().unwrap().value(), "G");
}

#[test]
fn given_char_mode_when_rebuilding_then_each_char_is_a_node() {
    let settings = Settings::default().with_overrides(None, Some(TokenMode::Chars), None);
    let tree = service(settings).rebuild("FBADCEGIH", "ABCDEFGHI").unwrap();

    assert_eq!(tree.len(), 9);
    let rendered = tree.to_tree_string().to_string();
    assert!(rendered.starts_with("F\n"));
}

#[test]
fn given_multi_digit_values_when_rebuilding_then_keeps_values_whole() {
    let tree = service(Settings::default())
        .rebuild("3 9 20 15 7", "9 3 15 20 7")
        .unwrap();

    let root = tree.root().unwrap();
    assert_eq!(root.value(), "3");
    assert_eq!(root.right().unwrap().left().unwrap().value(), "15");
}

#[test]
fn given_blank_traversals_when_rebuilding_then_returns_empty_tree() {
    let tree = service(Settings::default()).rebuild("", "  ").unwrap();
    assert!(tree.is_empty());
}

#[test]
fn given_mismatched_elements_when_checking_then_returns_domain_error() {
    let err = service(Settings::default()).check("A B", "A C").unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(TraversalError::Validation(
            ValidationError::ElementSetMismatch
        ))
    ));
}

#[test]
fn given_consistent_traversals_when_checking_then_returns_count() {
    let count = service(Settings::default()).check("B A C", "A B C").unwrap();
    assert_eq!(count, 3);
}

#[test]
fn given_leaf_truncation_when_rebuilding_chain_then_returns_single_node() {
    let settings = Settings::default().with_overrides(Some(SubtreePolicy::LeafTruncation), None, None);
    let tree = service(settings).rebuild("A B C", "A B C").unwrap();
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_long_chain_text_when_rebuilding_then_returns_tree() {
    let text = (0..50_000).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");

    let tree = service(Settings::default()).rebuild(&text, &text).unwrap();

    assert_eq!(tree.depth(), 50_000);
}

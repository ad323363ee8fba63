//! Tests for operation mode determination.

use rstest::rstest;

use crate::GavelConfig;
use crate::config::OperationMode;

#[rstest]
fn search_tui_when_no_mode_flags_set() {
    let config = GavelConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::SearchTui,
        "should fall back to the search TUI"
    );
}

#[rstest]
fn listing_when_list_flag_set() {
    let config = GavelConfig {
        list: true,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::SearchListing);
}

#[rstest]
fn chat_wins_over_listing() {
    let config = GavelConfig {
        list: true,
        chat: true,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::ChatRoom);
}

#[rstest]
fn reviews_file_wins_over_everything() {
    let config = GavelConfig {
        list: true,
        chat: true,
        reviews_file: Some("reviews.json".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::ReviewRender);
}

#[rstest]
fn search_inputs_do_not_change_mode() {
    let config = GavelConfig {
        query: Some("lamp".to_owned()),
        category: Some("Electronic".to_owned()),
        page: 4,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::SearchTui);
}

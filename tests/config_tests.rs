//! Tests for option handling and validation through the public API.

use spb::config::validate::LEN_BAR_RANGE;
use spb::{BarVariant, Error, ProgressBarBuilder, ProgressConfig, StartTime, Toggle};

mod common;
use common::helpers::*;

fn build_error(builder: ProgressBarBuilder) -> Error {
    builder
        .build_with_writer(TEST_COLUMNS, Vec::new(), StartTime::new())
        .expect_err("Configuration should be rejected")
}

#[test]
fn test_start_after_stop_is_rejected() {
    let err = build_error(create_test_builder().start(50).stop(10));
    assert!(matches!(err, Error::InvalidBounds { start: 50, stop: 10 }));
    let message = err.to_string();
    assert!(message.contains("start"));
    assert!(message.contains("stop"));
}

#[test]
fn test_zero_stop_is_rejected() {
    let err = build_error(create_test_builder().start(0).stop(0));
    assert!(matches!(err, Error::InvalidBounds { .. }));
}

#[test]
fn test_short_bar_is_rejected() {
    let err = build_error(create_test_builder().len_bar(5));
    match err {
        Error::InvalidOption { field, value, expected } => {
            assert_eq!(field, "len_bar");
            assert_eq!(value, "5");
            assert!(expected.contains(&LEN_BAR_RANGE.start().to_string()));
            assert!(expected.contains(&LEN_BAR_RANGE.end().to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_three_character_brackets_are_rejected() {
    let err = build_error(create_test_builder().variant_brackets("[=]"));
    assert!(matches!(err, Error::InvalidOption { field: "variant_brackets", .. }));
}

#[test]
fn test_multi_glyph_icons_are_rejected() {
    let err = build_error(create_test_builder().variant_icon_speed("🚀🚀"));
    assert!(matches!(err, Error::InvalidOption { field: "variant_icon_speed", .. }));

    let err = build_error(create_test_builder().variant_icon_timer("   "));
    assert!(matches!(err, Error::InvalidOption { field: "variant_icon_timer", .. }));
}

#[test]
fn test_narrow_terminal_is_rejected() {
    let builder = create_test_builder().len_bar(100).speed(Toggle::Show).load(Toggle::Show);
    let err = builder
        .build_with_writer(80, Vec::new(), StartTime::new())
        .expect_err("A 100 column bar does not fit in 80 columns");
    assert!(err.is_configuration_error());
    assert!(matches!(err, Error::TerminalTooNarrow { available: 80, .. }));
}

#[test]
fn test_rejected_configuration_writes_nothing() {
    let buffer = SharedBuffer::default();
    let result = create_test_builder()
        .len_bar(1000)
        .build_with_writer(TEST_COLUMNS, buffer.clone(), StartTime::new());
    assert!(result.is_err());
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_text_options_feed_the_builder() {
    let mut config = ProgressConfig::default();
    for (name, value) in [
        ("stop", "4"),
        ("len_bar", "10"),
        ("variant_bar", " increasing "),
        ("variant_arrow", "="),
        ("timer", "hide"),
        ("color", "red"),
    ] {
        config.set_option(name, value).unwrap();
    }
    let mut bar = create_test_bar(ProgressBarBuilder::from_config(config));
    bar.advance().unwrap();
    bar.advance().unwrap();
    assert_eq!(last_frame(&output(&bar)), " ==== 50.0%");
    assert_eq!(bar.config().brackets(), (" ", ""));
}

#[test]
fn test_enumerated_text_must_match_exactly() {
    let mut config = ProgressConfig::default();
    assert!(config.set_option("variant_bar", "Static").is_err());
    assert!(config.set_option("color", "purple").is_err());
    assert_eq!(config.variant_bar, BarVariant::Static);
}

use super::*;

#[test]
fn parse_level_accepts_any_case() {
    assert_eq!(parse_level("debug"), log::Level::Debug);
    assert_eq!(parse_level("WARN"), log::Level::Warn);
    assert_eq!(parse_level(" error "), log::Level::Error);
}

#[test]
fn parse_level_falls_back_to_info() {
    assert_eq!(parse_level(""), log::Level::Info);
    assert_eq!(parse_level("verbose"), log::Level::Info);
}

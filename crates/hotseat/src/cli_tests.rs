use super::*;

#[test]
fn test_square_names_are_clicks() {
    assert_eq!(Command::parse("e2"), Some(Command::Click(Coord::new(4, 1))));
    assert_eq!(Command::parse("  H8 \n"), Some(Command::Click(Coord::new(7, 7))));
    assert_eq!(Command::parse("a10"), Some(Command::Click(Coord::new(0, 9))));
}

#[test]
fn test_keywords() {
    assert_eq!(Command::parse("board"), Some(Command::Show));
    assert_eq!(Command::parse("moves"), Some(Command::Moves));
    assert_eq!(Command::parse("cancel"), Some(Command::Deselect));
    assert_eq!(Command::parse("Replay"), Some(Command::Reset));
    assert_eq!(Command::parse("?"), Some(Command::Help));
    assert_eq!(Command::parse("q"), Some(Command::Quit));
}

#[test]
fn test_blank_and_unknown_input() {
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("   "), None);
    assert_eq!(
        Command::parse("castle now"),
        Some(Command::Unknown("castle".to_string()))
    );
    assert_eq!(Command::parse("e0"), Some(Command::Unknown("e0".to_string())));
    assert_eq!(Command::parse("a+3"), Some(Command::Unknown("a+3".to_string())));
}

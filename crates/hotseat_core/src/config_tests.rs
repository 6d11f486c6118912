use super::*;
use crate::board::STANDARD_PLACEMENT;

#[test]
fn test_empty_config_is_standard_game() {
    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
    let board = config.build_board().unwrap();
    assert_eq!(board.placement(), STANDARD_PLACEMENT);
}

#[test]
fn test_custom_placement_and_first_team() {
    let config = GameConfig::from_toml_str(
        r#"
first_team = "black"
placement = "4k3/8/8/8/8/8/8/4K3"
"#,
    )
    .unwrap();
    assert_eq!(config.first_team, Team::Black);
    let board = config.build_board().unwrap();
    assert_eq!(board.pieces().count(), 2);
}

#[test]
fn test_small_board_with_placement() {
    let config = GameConfig::from_toml_str(
        r#"
width = 5
height = 5
placement = "k4/5/5/5/4K"
"#,
    )
    .unwrap();
    let board = config.build_board().unwrap();
    assert_eq!(board.width(), 5);
    assert_eq!(board.placement(), "k4/5/5/5/4K");
}

#[test]
fn test_standard_layout_requires_8x8() {
    let config = GameConfig {
        width: 10,
        ..GameConfig::default()
    };
    assert!(matches!(
        config.build_board(),
        Err(SetupError::NonStandardBoard { width: 10, height: 8 })
    ));
}

#[test]
fn test_invalid_toml_is_reported() {
    assert!(matches!(
        GameConfig::from_toml_str("colour = \"white\""),
        Err(SetupError::ParseConfig(_))
    ));
    assert!(matches!(
        GameConfig::from_toml_str("first_team = \"green\""),
        Err(SetupError::ParseConfig(_))
    ));
}

#[test]
fn test_missing_file_is_reported() {
    let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, SetupError::ReadConfig { .. }));
    assert!(err.to_string().contains("here.toml"));
}

#[test]
fn test_oversized_digit_run_is_a_setup_error() {
    let text = format!("placement = \"{}/8/8/8/8/8/8/4K3\"", "9".repeat(30));
    let config = GameConfig::from_toml_str(&text).unwrap();
    assert!(matches!(
        config.build_board(),
        Err(SetupError::FileCount { .. })
    ));
}

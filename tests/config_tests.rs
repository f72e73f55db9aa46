use moodtrack::config::Config;
use moodtrack::errors::AppError;

#[test]
fn test_missing_fields_use_defaults() {
    let cfg = Config::from_yaml("min_days: 5\nforest_seed: 7\n").unwrap();

    assert_eq!(cfg.min_days, 5);
    assert_eq!(cfg.forest_seed, 7);
    assert_eq!(cfg.forest_trees, 100);
    assert_eq!(cfg.chart_step, 6);
    assert_eq!(cfg.positive_moods, ["happy", "excited", "relaxed", "calm"]);
    assert!(cfg.data_file.ends_with("mood_activity_data.csv"));
}

#[test]
fn test_empty_file_is_default_config() {
    let cfg = Config::from_yaml("   \n").unwrap();

    assert_eq!(cfg.min_days, 3);
    assert_eq!(cfg.forest_seed, 42);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let err = Config::from_yaml("min_days: [not, a, number]").unwrap_err();

    assert!(matches!(err, AppError::ConfigParse(_)));
}

#[test]
fn test_yaml_round_trip() {
    let cfg = Config {
        data_file: "~/journal.csv".into(),
        positive_moods: vec!["joyful".into()],
        ..Config::default()
    };

    let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();

    assert_eq!(back.data_file, "~/journal.csv");
    assert_eq!(back.positive_moods, ["joyful"]);
}

#[test]
fn test_relative_data_override_is_taken_from_current_dir() {
    let resolved = Config::resolve_data_file("journal.csv").unwrap();

    let expected = std::env::current_dir().unwrap().join("journal.csv");
    assert_eq!(resolved, expected.to_string_lossy());
}

#[test]
fn test_absolute_data_override_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.csv");

    let resolved = Config::resolve_data_file(&path.to_string_lossy()).unwrap();

    assert_eq!(resolved, path.to_string_lossy());
}

use predicates::str::contains;
use std::fs;

mod common;
use common::Sandbox;

#[test]
fn test_init_creates_empty_data_file() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file created"));

    let content = fs::read_to_string(&sb.data).expect("read data file");
    assert_eq!(content, "username,date,mood,activity\n");

    // test mode never writes the config file
    assert!(!sb.config_file().exists());
}

#[test]
fn test_init_keeps_existing_data() {
    let sb = Sandbox::new();
    sb.seed(&[common::rec("alice", common::today(), "happy", "belajar")]);

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(sb.load().len(), 1);
}

#[test]
fn test_init_writes_config_pointing_at_data_file() {
    let sb = Sandbox::new();

    sb.cmd().arg("init").assert().success();

    let conf = fs::read_to_string(sb.config_file()).expect("read config file");
    assert!(conf.contains(&*sb.data.to_string_lossy()));
    assert!(conf.contains("min_days: 3"));
}

#[test]
fn test_init_leaves_existing_config_untouched() {
    let sb = Sandbox::new();
    let journal = sb.home.path().join("mine.csv");
    let conf = format!(
        "data_file: {}\nmin_days: 5\nforest_seed: 7\n",
        journal.display()
    );
    fs::create_dir_all(sb.home.path().join(".moodtrack")).unwrap();
    fs::write(sb.config_file(), &conf).unwrap();

    sb.cmd_without_data()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file already exists"));

    assert_eq!(fs::read_to_string(sb.config_file()).unwrap(), conf);
    let content = fs::read_to_string(&journal).expect("read configured data file");
    assert_eq!(content, "username,date,mood,activity\n");
}

#[test]
fn test_init_data_override_does_not_rewrite_config() {
    let sb = Sandbox::new();
    let conf = "min_days: 5\nforest_seed: 7\n";
    fs::create_dir_all(sb.home.path().join(".moodtrack")).unwrap();
    fs::write(sb.config_file(), conf).unwrap();

    sb.cmd().arg("init").assert().success();

    assert_eq!(fs::read_to_string(sb.config_file()).unwrap(), conf);
    assert!(sb.data.exists());
}

#[test]
fn test_relative_data_path_is_shared_by_init_and_session() {
    let sb = Sandbox::new();
    let work = sb.home.path().join("work");
    fs::create_dir_all(&work).unwrap();

    sb.cmd_without_data()
        .current_dir(&work)
        .args(["--test", "--data", "j.csv", "init"])
        .assert()
        .success()
        .stdout(contains("Data file created"));

    sb.cmd_without_data()
        .current_dir(&work)
        .args(["--data", "j.csv"])
        .write_stdin("\nalice\nhappy\nbaca\n5\n")
        .assert()
        .success()
        .stdout(contains("Entry saved!"));

    let content = fs::read_to_string(work.join("j.csv")).expect("read data file");
    assert!(content.starts_with("username,date,mood,activity\n"));
    assert!(content.contains(&format!("alice,{},happy,baca", common::today_str())));
    assert!(!sb.home.path().join(".moodtrack").join("j.csv").exists());
}

#[test]
fn test_config_print() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("min_days: 3"))
        .stdout(contains("forest_seed: 42"))
        .stdout(contains("- relaxed"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let sb = Sandbox::new();
    let dir = sb.home.path().join(".moodtrack");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("moodtrack.conf"), "min_days: [1, 2]\n").unwrap();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_log_print_after_session() {
    let sb = Sandbox::new();

    sb.cmd()
        .write_stdin("\nalice\nhappy\nbelajar\n5\n")
        .assert()
        .success();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("(alice)"))
        .stdout(contains("Logged today's entry"));
}

#[test]
fn test_log_print_without_log() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log is empty"));
}

use famcare_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let first = tempfile::tempdir().expect("create temp dir");
    let second = tempfile::tempdir().expect("create temp dir");
    let first_dir = first.path().join("logs");
    let first_str = first_dir.to_str().expect("utf-8 temp path");
    let second_str = second.path().to_str().expect("utf-8 temp path");

    init_logging("info", first_str).expect("first init should succeed");
    init_logging(" INFO ", first_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", first_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", second_str).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first_dir);
    assert!(first_dir.is_dir(), "init must create the log directory");
}

#[test]
fn init_logging_rejects_bad_input_without_panicking() {
    assert!(init_logging("verbose", "/tmp/famcare-logs").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
}

use linelog::{logging::MemorySink, Builder, LogBridge, Severity};

#[test]
pub fn install_sets_max_level_and_routes_macros() {
    let memory = MemorySink::new();
    let logger = Builder::new()
        .with_threshold(Severity::Warning)
        .with_sink(memory.clone())
        .build()
        .expect("logger");

    LogBridge::new(logger).install().expect("install");

    assert_eq!(log::max_level(), log::LevelFilter::Warn);

    log::info!(target: "main", "This message should not be logged");
    log::warn!(target: "network", "Connection lost");
    log::error!(target: "disk", "Disk failure");
    log::logger().flush();

    let lines = memory.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] [WARNING] [network] Connection lost"));
    assert!(lines[1].ends_with("] [ERROR] [disk] Disk failure"));

    let second = Builder::new().build().unwrap();
    assert!(LogBridge::new(second).install().is_err());
}

use log::LevelFilter;

/// Route `log` records to stderr so stdout stays the console transcript
pub fn setup_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}

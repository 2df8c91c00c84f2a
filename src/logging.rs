use log::LevelFilter;

/// Map `-v` occurrences to a level filter. `RUST_LOG` still wins when set.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();

    // A logger may already be installed when running under a test harness
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

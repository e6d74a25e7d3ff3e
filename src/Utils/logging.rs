use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Initialises the terminal logger. A second call keeps the first logger and returns an error.
pub fn init_logger(level: LevelFilter) -> Result<(), String> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(|e| format!("Failed to initialise logger: {}", e))
}

/// Log level from a name such as "info" or "debug"; unknown names give `Warn`
pub fn level_from_name(name: &str) -> LevelFilter {
    name.trim().parse::<LevelFilter>().unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_name() {
        assert_eq!(level_from_name("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from_name(" info "), LevelFilter::Info);
        assert_eq!(level_from_name("Trace"), LevelFilter::Trace);
        assert_eq!(level_from_name("off"), LevelFilter::Off);
        assert_eq!(level_from_name("warn"), LevelFilter::Warn);
        assert_eq!(level_from_name("loud"), LevelFilter::Warn);
    }
}

/// Installs the global logger. Later calls keep the first logger.
pub fn setup_logger(config: &super::config::Config) {
    let result = env_logger::Builder::from_default_env()
        .filter_level(level_filter(&config.log_level))
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

fn level_filter(log_level: &str) -> log::LevelFilter {
    match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Off,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_is_off() {
        assert_eq!(level_filter("warn"), log::LevelFilter::Warn);
        assert_eq!(level_filter("verbose"), log::LevelFilter::Off);
    }

    #[test]
    fn test_second_setup_keeps_first_logger() {
        let config = crate::utils::config::Config {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        setup_logger(&config);
        setup_logger(&crate::utils::config::Config {
            log_level: "error".to_string(),
            ..Default::default()
        });
        assert!(log::log_enabled!(log::Level::Debug));
    }
}

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONSOLE_APPENDER: &str = "stderr";
const PATTERN: &str = "{l}: {m}{n}";

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn build_config(verbose: bool) -> Config {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)))
        .build(
            Root::builder()
                .appender(CONSOLE_APPENDER)
                .build(level_for(verbose)),
        )
        .expect("Static logger configuration must be valid")
}

/// Installs the console logger. A second call keeps the first logger.
pub fn init(verbose: bool) {
    if let Err(e) = log4rs::init_config(build_config(verbose)) {
        eprintln!("Logger already initialised: {}", e);
        return;
    }
    log::debug!("Verbose mode enabled");
}

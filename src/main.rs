use KiRate::Utils::logging::{init_logger, level_from_name};
use KiRate::cli::cli_main::run_interactive_menu;

pub fn main() {
    // KIRATE_LOG=debug shows the dispatch details
    let level = std::env::var("KIRATE_LOG")
        .map(|name| level_from_name(&name))
        .unwrap_or(log::LevelFilter::Warn);
    if let Err(e) = init_logger(level) {
        eprintln!("{}", e);
    }
    run_interactive_menu();
}

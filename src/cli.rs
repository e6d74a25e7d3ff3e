pub mod cli_examples;
pub mod cli_main;
pub mod cli_rate_law;
pub mod cli_settings;

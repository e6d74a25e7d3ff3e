/// Reading batches of rate-law tasks from text files
pub mod load_from_file;
/// Terminal logger setup for the binary
pub mod logging;

use clap::Parser;
use log::LevelFilter;

/// CLI arguments for pivloop.
///
/// The target project is always the current working directory; templates are
/// read from the skill root the tool is installed under.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Report detected and merged configuration while generating.
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map the `--debug` flag to the appropriate log level.
pub fn get_log_level_from_debug(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

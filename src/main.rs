use pivloop::{
    cli::{get_args, get_log_level_from_debug, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_debug(args.debug))
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

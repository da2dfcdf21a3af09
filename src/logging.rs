pub use log::LevelFilter;

pub fn setup_logging(verbosity: LevelFilter) {
    fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            out.finish(format_args!("({}) {}: {}", record.level(), record.target(), message))
        })
        .chain(std::io::stdout())
        .apply()
        .expect("logging can only be initialized once");
}

use std::io::Write;

pub const DEFAULT_LEVEL: &str = "info";

/// Install the global logger: `LEVEL<TAB>message`, filtered by RUST_LOG or `default_level`.
pub fn init(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "{}\t{}", record.level(), record.args()))
        .init();
}

use list_partitioner::{run, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::default();
    if let Err(e) = run(&config) {
        eprintln!("{} step: {e}", e.step());
        std::process::exit(1);
    }
}

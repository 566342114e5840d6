use clap::Parser;
use priceoptimize_api::config::{CliArgs, Config};
use priceoptimize_api::{logger, server, ServerError};

fn main() -> Result<(), ServerError> {
    let args = CliArgs::parse();
    let cfg = Config::load_from(&args.config)?;
    let addr = cfg.get_socket_addr()?;

    if args.check {
        println!("Configuration OK: {} (listening on {addr})", args.config);
        return Ok(());
    }

    logger::init(&cfg)?;

    // Build the Tokio runtime; worker count comes from config or defaults to CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(server::run(cfg))
}

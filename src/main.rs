use std::path::PathBuf;

use outserve::{config, logger, resolve_root, server, StartError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load().map_err(StartError::from)?;
    logger::init(&cfg.logging).map_err(StartError::Logger)?;

    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(&base, &cfg.root.candidate);

    // One thread unless workers are configured explicitly
    let mut runtime_builder = match cfg.server.workers {
        Some(workers) if workers > 0 => {
            let mut builder = tokio::runtime::Builder::new_multi_thread();
            builder.worker_threads(workers);
            builder
        }
        _ => tokio::runtime::Builder::new_current_thread(),
    };
    let runtime = runtime_builder
        .enable_all()
        .build()
        .map_err(StartError::Runtime)?;

    runtime.block_on(server::start(cfg, root))?;
    Ok(())
}

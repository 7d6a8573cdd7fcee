use anyhow::Result;
use regdedup::{config::Config, load, output, process};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure paths ──────────────────────────────────────────
    let config = Config::from_args(std::env::args().skip(1));
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "configured"
    );

    // ─── 3) load registrants ─────────────────────────────────────────
    let table = load::load_registrants(&config.input_path)?;

    // ─── 4) normalize, dedup, flag ───────────────────────────────────
    let table = process::run(table);

    // ─── 5) write results ────────────────────────────────────────────
    output::write_results(&config.output_path, &table)?;

    info!("all done");
    Ok(())
}

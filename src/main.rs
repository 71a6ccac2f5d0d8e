use anyhow::{Context, Result};
use pendulum_plot::{run, RunConfig, RunOutcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::default();
    match run(&config).context("rendering pendulum comparison")? {
        RunOutcome::Rendered { output, rows } => {
            log::debug!("{} rows plotted into {}", rows, output.display());
        }
        RunOutcome::NoData => {}
    }
    Ok(())
}

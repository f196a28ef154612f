// main.rs - Headless driver running both automaton variants

use anyhow::Result;
use torus_life::{Automaton, Cell, LifeConfig, PlaneSet, RowScheduler, TracingSurface};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = LifeConfig::default();
    let scheduler = RowScheduler::new()?;

    run::<bool>("binary", &config, &scheduler)?;
    run::<PlaneSet>("multi-plane", &config, &scheduler)?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run<C: Cell>(variant: &str, config: &LifeConfig, scheduler: &RowScheduler) -> Result<()> {
    let mut life = Automaton::<C, _>::from_config(config, TracingSurface::default())?;
    life.randomize(config.fill_percent);
    info!(
        variant,
        width = life.width(),
        height = life.height(),
        population = life.population(),
        "Seeded grid",
    );

    for _ in 0..config.generations {
        life.step_with(scheduler)?;
    }

    info!(
        variant,
        generation = life.generation(),
        population = life.population(),
        painted = life.surface().painted(),
        "Finished run",
    );
    Ok(())
}

//! Independent replications of one station, one run per seed.

use super::config::{ConcurrencyMode, SimulationConfig, SimulationParams};
use super::error::{SimError, SimResult};
use super::simulation::SimulationRun;
use super::waiting_log::WaitingTimeLog;
use log::info;
use rayon::prelude::*;

fn run_seeded(params: &SimulationParams, seed: u64) -> SimResult<WaitingTimeLog> {
    SimulationRun::new(params.clone().with_seed(seed))?.run()
}

/// Run `params` once per seed. Logs come back in seed order and do not depend
/// on the concurrency mode; `params.seed` is ignored.
pub fn run_replications(
    params: &SimulationParams,
    seeds: &[u64],
    config: &SimulationConfig,
) -> SimResult<Vec<WaitingTimeLog>> {
    params.validate()?;
    info!(
        "Running {} replications ({:?})",
        seeds.len(),
        config.concurrency_mode
    );

    match config.concurrency_mode {
        ConcurrencyMode::Sequential => seeds
            .iter()
            .map(|&seed| run_seeded(params, seed))
            .collect(),
        ConcurrencyMode::Rayon => {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(size) = config.thread_pool_size {
                builder = builder.num_threads(size);
            }
            let pool = builder
                .build()
                .map_err(|e| SimError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                seeds
                    .par_iter()
                    .map(|&seed| run_seeded(params, seed))
                    .collect()
            })
        }
    }
}

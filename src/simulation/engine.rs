//! High-level runtime engine settings
//!
//! Selects the contact model (hard/soft) and the execution mode
//! (sequential or rayon worker pool) used when building and running a
//! `Scenario`. `Execution::for_each_particle` is the one parallel-map
//! primitive the integrator uses: grains are updated through disjoint
//! `&mut` slots, so the map is race-free in either mode.

use rayon::prelude::*;

use crate::configuration::config::ContactConfig;
use crate::simulation::states::Particle;

pub struct Engine {
    pub contact: ContactConfig, // hard or soft response
    pub execution: Execution, // sequential or worker pool
}

/// How the per-grain updates of one sub-step are executed.
pub enum Execution {
    /// Plain in-order loop over the ensemble.
    Sequential,
    /// Data-parallel map on a dedicated rayon pool. The pool is built once
    /// at scenario construction with the configured worker count.
    Pool(rayon::ThreadPool),
}

impl Execution {
    /// Apply `f` to every grain of the ensemble. `f` must only touch the
    /// grain it is handed; the ensemble slots are disjoint, so the parallel
    /// mode needs no locking and may visit grains in any order.
    ///
    /// In pool mode this blocks until every grain has been updated, which
    /// gives the integrator its barrier between the grain map and the clock
    /// advance.
    pub fn for_each_particle<F>(&self, particles: &mut [Particle], f: F)
    where
        F: Fn(&mut Particle) + Send + Sync,
    {
        match self {
            Execution::Sequential => particles.iter_mut().for_each(f),
            Execution::Pool(pool) => pool.install(|| particles.par_iter_mut().for_each(|p| f(p))),
        }
    }

    /// Number of workers this mode runs on (1 when sequential).
    pub fn workers(&self) -> usize {
        match self {
            Execution::Sequential => 1,
            Execution::Pool(pool) => pool.current_num_threads(),
        }
    }
}

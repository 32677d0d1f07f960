//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`, including the worker pool when parallel)
//! - numerical parameters (`Parameters`)
//! - box geometry (`Plate`)
//! - system state (`Ensemble` with grains at t = 0)
//! - the selected collision response (`ContactModel`)
//!
//! Initialization draws the grain velocities from an explicitly seeded
//! generator owned by the build, so a fixed seed reproduces a run exactly.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::configuration::config::{ConfigError, ContactConfig, ScenarioConfig};
use crate::simulation::contact::{ContactModel, HardContact, SoftContact};
use crate::simulation::engine::{Engine, Execution};
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::plate::Plate;
use crate::simulation::states::{Ensemble, Particle};

/// Pool size used when `engine.parallel` is set and no worker count is given.
pub const DEFAULT_WORKERS: usize = 6;

/// A fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, box geometry, current
/// system state, and the collision response selected for the run.
///
/// The ensemble is owned here for the whole run; the integrator and the
/// dump writer only ever borrow it.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub plate: Plate,
    pub system: Ensemble,
    pub contact: Box<dyn ContactModel + Send + Sync>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig, with the time-step
        // default resolved once here
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            amp: p_cfg.amp,
            w: p_cfg.w,
            h: p_cfg.h,
            res: p_cfg.res,
            k: p_cfg.k,
            gamma: p_cfg.gamma,
            dt: p_cfg.dt(),
            seed: p_cfg.seed,
        };

        // Box geometry shared by the contact models and the dump writer
        let plate = Plate {
            amp: parameters.amp,
            w: parameters.w,
            h: parameters.h,
        };

        // Grains: centered in the gap, velocity drawn uniformly from
        // [-v_range, v_range] with an explicitly seeded generator
        let e_cfg = &cfg.ensemble;
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        let particles = (0..e_cfg.count)
            .map(|_| Particle {
                z: parameters.h / 2.0,
                v: rng.random_range(-e_cfg.v_range..=e_cfg.v_range),
                radius: e_cfg.radius,
            })
            .collect();

        // Initial system state: grains at t = 0
        let system = Ensemble { particles, t: 0.0 };

        // Collision response: selected once here, shared by every grain
        let contact: Box<dyn ContactModel + Send + Sync> = match cfg.engine.contact {
            ContactConfig::Hard => Box::new(HardContact {
                g: parameters.g,
                res: parameters.res,
                dt: parameters.dt,
            }),
            ContactConfig::Soft => Box::new(SoftContact {
                g: parameters.g,
                k: parameters.k,
                gamma: parameters.gamma,
                dt: parameters.dt,
            }),
        };

        // Execution mode: the pool is built once and reused for every batch
        let execution = if cfg.engine.parallel {
            let workers = cfg.engine.workers.unwrap_or(DEFAULT_WORKERS);
            let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
            Execution::Pool(pool)
        } else {
            Execution::Sequential
        };

        let engine = Engine {
            contact: cfg.engine.contact,
            execution,
        };

        Ok(Self {
            engine,
            parameters,
            plate,
            system,
            contact,
        })
    }

    /// Advance the scenario by `steps` sub-steps.
    pub fn step(&mut self, steps: u64) {
        integrate(
            &mut self.system,
            self.contact.as_ref(),
            &self.plate,
            &self.parameters,
            &self.engine.execution,
            steps,
        );
    }
}

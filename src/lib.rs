pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Particle, Ensemble};
pub use simulation::params::Parameters;
pub use simulation::plate::{Plate, Contact};
pub use simulation::contact::{ContactModel, HardContact, SoftContact};
pub use simulation::engine::{Engine, Execution};
pub use simulation::integrator::integrate;
pub use simulation::scenario::{Scenario, DEFAULT_WORKERS};

pub use configuration::config::{
    ConfigError, ContactConfig, EngineConfig, EnsembleConfig, OutputConfig, ParametersConfig,
    RunConfig, ScenarioConfig,
};

pub use output::dump::{default_filename, DumpWriter};

pub use benchmark::benchmark::{bench_step, bench_step_curve};

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! vibrated-box scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (contact model, parallelism)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`EnsembleConfig`]   – grain count and initial-state ranges
//! - [`RunConfig`]        – warm-up and output cadence of the driver loop
//! - [`OutputConfig`]     – dump-file destination
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   contact: "hard"         # or "soft"
//!   parallel: false
//!   workers: 6              # pool size when parallel
//!
//! parameters:
//!   g: -0.1                 # gravity (negative = downward)
//!   amp: 0.29               # plate oscillation amplitude
//!   w: 1.0                  # plate angular frequency
//!   h: 3.0                  # gap between floor and ceiling
//!   res: 0.9                # restitution (hard model)
//!   k: 1001.0               # penalty stiffness (soft model)
//!   gamma: 1.0              # penalty damping (soft model)
//!   dt: 0.00628318          # omit to default to 0.001 * 2 pi * w
//!   seed: 42
//!
//! ensemble:
//!   count: 10
//!   radius: 0.5
//!   v_range: 30.0           # initial velocity drawn uniformly in +-v_range
//!
//! run:
//!   warmup_steps: 1000000   # sub-steps before the first frame
//!   frames: 100000
//!   steps_per_frame: 1000
//!
//! output:
//!   file: "column.dumpL"    # omit to derive the name from amp and h
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, which may use different structs optimized for performance.

use serde::Deserialize;
use std::f64::consts::TAU;
use thiserror::Error;

/// Which collision response the engine uses
/// `contact: "hard"` or `contact: "soft"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactConfig {
    #[serde(rename = "hard")] // Instantaneous rebound: mirror the overlap, restitution-scaled bounce off the moving wall
    Hard,

    #[serde(rename = "soft")] // Continuous penalty: linear spring-damper contact force, forward-Euler integration
    Soft,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub contact: ContactConfig, // collision response used for every grain
    pub parallel: bool, // `true` - per-grain updates run on a worker pool, `false` - plain sequential loop
    pub workers: Option<usize>, // pool size when parallel; defaults to 6
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,      // gravity acceleration
    pub amp: f64,    // plate oscillation amplitude
    pub w: f64,      // plate angular frequency
    pub h: f64,      // gap between floor and ceiling
    pub res: f64,    // restitution coefficient (hard model)
    pub k: f64,      // penalty stiffness (soft model)
    pub gamma: f64,  // penalty damping (soft model)
    pub dt: Option<f64>, // fixed time step; omit for 0.001 * 2 pi * w
    pub seed: u64,   // deterministic seed to make runs reproducible
}

impl ParametersConfig {
    /// Effective time step: the configured value, or the frequency-scaled
    /// default `0.001 * 2 pi * w`.
    pub fn dt(&self) -> f64 {
        self.dt.unwrap_or(0.001 * TAU * self.w)
    }
}

/// Initial ensemble: how many grains and what state they start in.
/// Every grain starts centered in the gap (`z = h/2`) with a velocity drawn
/// uniformly from `[-v_range, v_range]`.
#[derive(Deserialize, Debug, Clone)]
pub struct EnsembleConfig {
    pub count: usize, // number of grains
    pub radius: f64,  // grain radius, uniform across the ensemble
    #[serde(default = "default_v_range")]
    pub v_range: f64, // half-width of the initial velocity draw
}

fn default_v_range() -> f64 {
    30.0
}

/// Driver-loop cadence: one long warm-up batch with no output, then
/// `frames` batches of `steps_per_frame` sub-steps, one dump frame each.
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub warmup_steps: u64,    // sub-steps before the first frame
    pub frames: u64,          // number of dump frames
    pub steps_per_frame: u64, // sub-steps between consecutive frames
}

/// Dump-file destination. When `file` is omitted the name is derived from
/// the amplitude and gap height, as the dump consumers expect.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputConfig {
    pub file: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (contact model, parallelism)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub ensemble: EnsembleConfig, // grain count and initial-state ranges
    pub run: RunConfig, // warm-up and frame cadence
    #[serde(default)]
    pub output: OutputConfig, // dump destination
}

/// Structural problems in a scenario, reported before the first sub-step.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScenarioConfig {
    /// Validate the structural invariants the core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bad = |msg: String| Err(ConfigError::InvalidParameter(msg));

        if self.ensemble.count == 0 {
            return bad("ensemble.count must be at least 1".into());
        }
        if !(self.ensemble.radius > 0.0) {
            return bad(format!("ensemble.radius must be > 0, got {}", self.ensemble.radius));
        }
        if self.ensemble.v_range < 0.0 {
            return bad(format!("ensemble.v_range must be >= 0, got {}", self.ensemble.v_range));
        }
        if !(self.parameters.h > 0.0) {
            return bad(format!("parameters.h must be > 0, got {}", self.parameters.h));
        }
        if !(self.parameters.dt() > 0.0) {
            return bad(format!("time step must be > 0, got {}", self.parameters.dt()));
        }
        if self.engine.parallel && self.engine.workers == Some(0) {
            return bad("engine.workers must be at least 1".into());
        }
        Ok(())
    }
}

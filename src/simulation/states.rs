//! Core state types for the vibrated-box simulation.
//!
//! Defines the per-grain state and the ensemble:
//! - `Particle` — one independent grain (vertical coordinate only)
//! - `Ensemble` — the full particle collection plus the simulation clock `t`
//!
//! Particles never interact with each other; the ensemble is mutated in
//! place by the integrator and owned by the scenario for the whole run.

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub z: f64, // vertical position
    pub v: f64, // vertical velocity
    pub radius: f64, // grain radius, constant over the run
}

#[derive(Debug, Clone)]
pub struct Ensemble {
    pub particles: Vec<Particle>, // collection of independent grains
    pub t: f64, // simulation clock, advanced once per sub-step
}

impl Ensemble {
    /// Number of grains in the ensemble.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravity and the fixed integration step,
//! - plate oscillation amplitude, angular frequency and gap height,
//! - restitution for the hard contact model,
//! - stiffness and damping for the soft penalty model,
//! - random seed for the initial velocity draw

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravity acceleration (negative = downward)
    pub amp: f64, // plate oscillation amplitude
    pub w: f64, // plate angular frequency
    pub h: f64, // gap height between floor and ceiling
    pub res: f64, // restitution coefficient (hard model)
    pub k: f64, // penalty stiffness (soft model)
    pub gamma: f64, // penalty damping (soft model)
    pub dt: f64, // fixed time step
    pub seed: u64, // deterministic seed for the velocity draw
}

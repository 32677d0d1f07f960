//! Collision response models for grain/boundary contact
//!
//! Defines the `ContactModel` trait and its two implementations:
//! - `HardContact` — instantaneous rebound: mirror the overlap, drive the
//!   velocity toward the moving wall scaled by (1 + restitution), then a
//!   closed-form constant-gravity flight update
//! - `SoftContact` — continuous penalty: a linear spring-damper force on
//!   contact, integrated with explicit forward Euler
//!
//! The model is selected once at scenario build time and shared by all
//! grains; each call advances exactly one grain by one sub-step.

use crate::simulation::plate::{Contact, Plate};
use crate::simulation::states::Particle;

/// One full per-grain sub-step at clock value `t`: contact evaluation,
/// response, and flight update. Implementations mutate only the grain they
/// are handed, so the integrator may apply them in any order or in parallel.
pub trait ContactModel {
    fn advance(&self, p: &mut Particle, t: f64, plate: &Plate);
}

/// Instantaneous rebound off the moving boundaries.
///
/// On contact the grain is mirrored back by the overlap and its velocity is
/// pulled toward the wall velocity:
///
/// ```text
/// z -= 2 * overlap
/// v += (1 + res) * (vel(t) - v)
/// ```
///
/// With `res = 1` the bounce is elastic in the wall frame; with `res = 0`
/// the grain adopts the wall velocity exactly. Both boundaries use the same
/// `vel(t)` since they move rigidly together. Free flight then advances the
/// grain with the exact constant-acceleration kinematics, not an Euler step.
pub struct HardContact {
    pub g: f64, // gravity acceleration
    pub res: f64, // restitution coefficient
    pub dt: f64, // fixed time step
}

impl ContactModel for HardContact {
    fn advance(&self, p: &mut Particle, t: f64, plate: &Plate) {
        // The floor overlap is negative and the ceiling overlap is positive,
        // so the same mirror and bounce expressions serve both boundaries.
        if let Some(Contact::Floor(d) | Contact::Ceiling(d)) = plate.contact(p, t) {
            p.z -= 2.0 * d;
            p.v += (1.0 + self.res) * (plate.vel(t) - p.v);
        }

        // Exact flight under constant gravity for the remainder of the step:
        // z_n+1 = z_n + v_n dt + g dt^2 / 2, v_n+1 = v_n + g dt
        p.z += 0.5 * self.g * self.dt * self.dt + p.v * self.dt;
        p.v += self.g * self.dt;
    }
}

/// Linear spring-damper penalty against the boundaries.
///
/// Contact contributes to a per-grain force accumulator initialized to
/// gravity each step:
///
/// ```text
/// f = g - overlap * k - v * gamma
/// ```
///
/// The overlap sign (negative at the floor, positive at the ceiling) makes
/// the spring term push away from either boundary. The damper opposes the
/// grain's absolute velocity, not its velocity relative to the wall. No
/// position correction is applied; the grain leaves the boundary under the
/// accumulated force via forward Euler.
pub struct SoftContact {
    pub g: f64, // gravity acceleration
    pub k: f64, // spring stiffness
    pub gamma: f64, // damping coefficient
    pub dt: f64, // fixed time step
}

impl ContactModel for SoftContact {
    fn advance(&self, p: &mut Particle, t: f64, plate: &Plate) {
        let mut f = self.g;

        if let Some(Contact::Floor(d) | Contact::Ceiling(d)) = plate.contact(p, t) {
            f -= d * self.k + p.v * self.gamma;
        }

        // Explicit Euler: kick then drift with the updated velocity
        p.v += f * self.dt;
        p.z += p.v * self.dt;
    }
}

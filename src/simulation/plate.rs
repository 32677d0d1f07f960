//! Boundary kinematics for the oscillating box
//!
//! The floor and ceiling move rigidly together: the floor follows
//! `amp * sin(w t)`, the ceiling sits a fixed gap `h` above it, and both
//! share the analytic velocity `amp * w * cos(w t)`. All methods are pure
//! functions of time — no state, no error conditions.

use crate::simulation::states::Particle;

/// The oscillating box geometry: amplitude, angular frequency, gap height.
#[derive(Debug, Clone, Copy)]
pub struct Plate {
    pub amp: f64, // oscillation amplitude
    pub w: f64, // angular frequency
    pub h: f64, // gap between floor and ceiling
}

/// Which boundary a grain has penetrated, with the signed overlap from the
/// penetration test:
/// - `Floor(d)` with `d < 0`: grain is `|d|` below the floor contact line
/// - `Ceiling(d)` with `d > 0`: grain is `d` above the ceiling contact line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    Floor(f64),
    Ceiling(f64),
}

impl Plate {
    /// Instantaneous floor position at time `t`.
    pub fn floor_pos(&self, t: f64) -> f64 {
        self.amp * (self.w * t).sin()
    }

    /// Instantaneous ceiling position at time `t` (rigid gap above the floor).
    pub fn ceil_pos(&self, t: f64) -> f64 {
        self.floor_pos(t) + self.h
    }

    /// Plate velocity at time `t`, the analytic derivative of `floor_pos`.
    /// Shared by both boundaries since they move rigidly together.
    pub fn vel(&self, t: f64) -> f64 {
        self.amp * self.w * (self.w * t).cos()
    }

    /// Signed gap between the grain and the floor contact line.
    /// Negative means the grain penetrates the floor.
    pub fn floor_gap(&self, p: &Particle, t: f64) -> f64 {
        p.z - (self.floor_pos(t) + p.radius)
    }

    /// Signed gap between the grain and the ceiling contact line.
    /// Positive means the grain penetrates the ceiling.
    pub fn ceil_gap(&self, p: &Particle, t: f64) -> f64 {
        p.z - (self.ceil_pos(t) - p.radius)
    }

    /// Penetration probe with the floor-first tie-break: the ceiling is only
    /// checked when the grain is not already below the floor, so if both
    /// conditions were somehow true in one step, floor contact wins.
    pub fn contact(&self, p: &Particle, t: f64) -> Option<Contact> {
        let d = self.floor_gap(p, t);
        if d < 0.0 {
            return Some(Contact::Floor(d));
        }
        let d = self.ceil_gap(p, t);
        if d > 0.0 {
            return Some(Contact::Ceiling(d));
        }
        None
    }
}

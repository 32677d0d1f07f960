//! Fixed-step time integration of the grain ensemble
//!
//! Advances the whole ensemble by a batch of sub-steps. Each sub-step maps
//! the contact model over every grain at a frozen clock value, then advances
//! `sys.t` by exactly one `dt`. Grains are independent, so the per-grain
//! updates within a sub-step may run in any order or in parallel; across
//! sub-steps the sequencing is strict because the next sub-step's boundary
//! positions are functions of the completed clock.

use crate::simulation::contact::ContactModel;
use crate::simulation::engine::Execution;
use crate::simulation::params::Parameters;
use crate::simulation::plate::Plate;
use crate::simulation::states::Ensemble;

/// Advance `sys` by `steps` consecutive sub-steps of `params.dt`.
///
/// The clock value each grain sees is the one from the start of its
/// sub-step; `sys.t` is only advanced after `for_each_particle` has
/// returned, i.e. after every grain of that sub-step is fully updated.
pub fn integrate(
    sys: &mut Ensemble,
    model: &(dyn ContactModel + Send + Sync),
    plate: &Plate,
    params: &Parameters,
    execution: &Execution,
    steps: u64,
) {
    let dt = params.dt;

    for _ in 0..steps {
        // Frozen clock for the whole sub-step
        let t = sys.t;

        execution.for_each_particle(&mut sys.particles, |p| model.advance(p, t, plate));

        // Accumulated by repeated fixed increments, never recomputed
        sys.t += dt;
    }
}

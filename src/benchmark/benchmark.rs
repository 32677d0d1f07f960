use std::time::Instant;

use crate::simulation::contact::{ContactModel, HardContact, SoftContact};
use crate::simulation::engine::Execution;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::plate::Plate;
use crate::simulation::scenario::DEFAULT_WORKERS;
use crate::simulation::states::{Ensemble, Particle};

/// Helper to build a manual Ensemble of size `n`
fn make_ensemble(n: usize, params: &Parameters) -> Ensemble {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic velocities, no rand needed
        particles.push(Particle {
            z: params.h / 2.0,
            v: (i_f * 0.37).sin() * 30.0,
            radius: 0.5,
        });
    }

    Ensemble { particles, t: 0.0 }
}

/// Default parameter set for the benchmarks
fn make_params() -> Parameters {
    Parameters {
        g: -0.1,
        amp: 0.29,
        w: 1.0,
        h: 3.0,
        res: 0.9,
        k: 1001.0,
        gamma: 1.0,
        dt: 0.001 * std::f64::consts::TAU,
        seed: 42,
    }
}

/// Time one hard-model and one soft-model sub-step batch per ensemble size
pub fn bench_step() {
    // Different ensemble sizes to test
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let steps = 100; // sub-steps per timing (tune as needed)

    let params = make_params();
    let plate = Plate {
        amp: params.amp,
        w: params.w,
        h: params.h,
    };
    let seq = Execution::Sequential;

    let hard = HardContact {
        g: params.g,
        res: params.res,
        dt: params.dt,
    };
    let soft = SoftContact {
        g: params.g,
        k: params.k,
        gamma: params.gamma,
        dt: params.dt,
    };

    for n in ns {
        let template = make_ensemble(n, &params);

        // Hard model
        let mut sys_hard = template.clone();

        // Warm up
        integrate(&mut sys_hard, &hard, &plate, &params, &seq, 1);

        let t0 = Instant::now();
        integrate(&mut sys_hard, &hard, &plate, &params, &seq, steps);
        let hard_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Soft model
        let mut sys_soft = template.clone();

        // Warm up
        integrate(&mut sys_soft, &soft, &plate, &params, &seq, 1);

        let t1 = Instant::now();
        integrate(&mut sys_soft, &soft, &plate, &params, &seq, steps);
        let soft_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:8}, hard step = {:10.8} s, soft step = {:10.8} s",
            hard_per_step, soft_per_step
        );
    }
}

/// Benchmark sequential vs. pool execution for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,sequential_ms,pool_ms");

    let params = make_params();
    let plate = Plate {
        amp: params.amp,
        w: params.w,
        h: params.h,
    };
    let hard: Box<dyn ContactModel + Send + Sync> = Box::new(HardContact {
        g: params.g,
        res: params.res,
        dt: params.dt,
    });

    let seq = Execution::Sequential;
    let pool = Execution::Pool(
        rayon::ThreadPoolBuilder::new()
            .num_threads(DEFAULT_WORKERS)
            .build()
            .expect("worker pool for benchmark"),
    );

    for n in (20_000..=400_000).step_by(20_000) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 100_000 { 50 } else { 10 };

        let template = make_ensemble(n, &params);

        // Sequential
        let mut sys_seq = template.clone();
        integrate(&mut sys_seq, hard.as_ref(), &plate, &params, &seq, 1);

        let t0 = Instant::now();
        integrate(&mut sys_seq, hard.as_ref(), &plate, &params, &seq, steps);
        let ms_seq = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Worker pool
        let mut sys_pool = template.clone();
        integrate(&mut sys_pool, hard.as_ref(), &plate, &params, &pool, 1);

        let t1 = Instant::now();
        integrate(&mut sys_pool, hard.as_ref(), &plate, &params, &pool, steps);
        let ms_pool = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_pool);
    }
}

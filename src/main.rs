use vibrosim::{default_filename, DumpWriter, Scenario, ScenarioConfig};
use vibrosim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file
    #[arg(short, default_value = "scenarios/shaker.yaml")]
    file_name: String,

    /// Override the dump destination from the scenario file
    #[arg(short, long)]
    output: Option<String>,

    /// Run the step-rate benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("cannot parse scenario file {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_step_curve();
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let run = cfg.run.clone();
    let dump_path = args
        .output
        .or_else(|| cfg.output.file.clone())
        .unwrap_or_else(|| default_filename(cfg.parameters.amp, cfg.parameters.h));

    let mut scenario = Scenario::build_scenario(cfg)?;
    log::info!(
        "scenario: {} grains, {:?} contact, {} worker(s), dt = {:.6}",
        scenario.system.len(),
        scenario.engine.contact,
        scenario.engine.execution.workers(),
        scenario.parameters.dt,
    );

    let mut writer = DumpWriter::create(&dump_path)
        .with_context(|| format!("cannot create dump file {dump_path}"))?;

    log::info!("warm-up: {} sub-steps", run.warmup_steps);
    scenario.step(run.warmup_steps);

    for frame in 0..run.frames {
        scenario.step(run.steps_per_frame);
        writer
            .write_frame(&scenario.system, &scenario.plate)
            .with_context(|| format!("cannot write frame {frame} to {dump_path}"))?;

        if (frame + 1) % 1000 == 0 {
            log::info!("frame {}/{}, t = {:.3}", frame + 1, run.frames, scenario.system.t);
        }
    }

    writer.flush()?;
    log::info!("done: t = {:.6}, dump written to {}", scenario.system.t, dump_path);

    Ok(())
}

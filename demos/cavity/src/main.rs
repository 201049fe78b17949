//! cavity — lid-driven cavity demo for the rust_lb solver.
//!
//! Runs the same sliding-lid problem twice: once on a single grid and once
//! split into partitions stepped on their own threads.  Both runs write
//! CSV output under `output/cavity/`, and the final velocity fields are
//! compared cell by cell.
//!
//! Set `RUST_LOG=debug` to see every snapshot, or `RUST_LOG=lb_decomp=trace`
//! to follow the halo exchange.

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lb_core::{LbConfig, lattice};
use lb_output::{CsvWriter, Probe, SimOutputObserver};
use lb_sim::{Decomposition, Scenario, Sim, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const NX:                    usize = 100;
const NY:                    usize = 100;
const STEPS:                 u64   = 5_000;
const OMEGA:                 f64   = 1.7;
const LID_VELOCITY:          f64   = 0.1;
const PARTITIONS:            usize = 4;
const OUTPUT_INTERVAL_STEPS: u64   = 500;

// ── Runs ──────────────────────────────────────────────────────────────────────

fn probes() -> Vec<Probe> {
    vec![
        Probe::VelocityPoint { x: NX / 2, y: NY / 2 },
        Probe::VelocityColumn { x: NX / 2 },
        Probe::VelocityRow { y: NY / 2 },
    ]
}

fn run(label: &str, config: &LbConfig, decomposition: Option<Decomposition>) -> Result<Sim> {
    let mut builder = SimBuilder::new(config.clone(), Scenario::SlidingLid { wall_velocity: LID_VELOCITY });
    if let Some(d) = decomposition {
        builder = builder.decomposition(d);
    }
    let mut sim = builder.build()?;

    let dir = Path::new("output/cavity").join(label);
    std::fs::create_dir_all(&dir)?;
    let writer = CsvWriter::new(&dir)?;
    let mut obs = SimOutputObserver::new(writer, probes(), config)?;

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        bail!("{label}: output error: {e}");
    }

    println!("{label:<12} {:>8.3} s   output in {}", elapsed.as_secs_f64(), dir.display());
    Ok(sim)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = LbConfig::new(NX, NY, STEPS, OMEGA);
    config.output_interval_steps = OUTPUT_INTERVAL_STEPS;

    println!("=== cavity — rust_lb lid-driven cavity ===");
    println!(
        "Grid: {NX}x{NY}  |  Steps: {STEPS}  |  omega: {OMEGA}  |  Re: {:.1}",
        lattice::reynolds_number(LID_VELOCITY, NX as f64, OMEGA)
    );
    println!();

    let serial = run("serial", &config, None)?;
    let partitioned = run("partitioned", &config, Some(Decomposition::new(PARTITIONS)))?;

    // Compare the two final fields.
    let a = serial.fields()?;
    let b = partitioned.fields()?;
    let max_diff = a
        .velocity()
        .iter()
        .zip(b.velocity())
        .map(|(u, v)| (u[0] - v[0]).abs().max((u[1] - v[1]).abs()))
        .fold(0.0_f64, f64::max);
    info!(max_diff, "serial and partitioned velocity fields compared");

    println!();
    println!("Total mass      : {:.6}", a.total_mass());
    println!("Max speed       : {:.6}", a.max_speed());
    println!("Max |u_s - u_p| : {max_diff:.3e}");

    let [ux, uy] = a.velocity_at(NX / 2, NY / 2)?;
    println!("Centre velocity : ({ux:.6}, {uy:.6})");

    Ok(())
}

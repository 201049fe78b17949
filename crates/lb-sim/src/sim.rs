//! The `Sim` struct and its step loop.

use lb_boundary::BoundarySet;
use lb_core::lattice;
use lb_core::{Cell, LbConfig, MacroFields, Populations, Step};
use lb_decomp::PartitionedDomain;
use lb_solver::LatticeState;
use tracing::{debug, info};

use crate::{Scenario, SimError, SimObserver, SimResult};

/// Where a run is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimState {
    /// Validated, grid allocated, initial condition written.
    Configured,
    /// At least one step call has started.
    Running,
    /// The configured step count is exhausted.
    Finished,
}

/// How the grid is stored and stepped.
#[derive(Debug)]
pub enum Backend {
    /// One grid, stepped on the calling thread.
    Serial(LatticeState),
    /// Blocks stepped concurrently with halo exchange.
    Partitioned(PartitionedDomain),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each step runs, in order:
///
/// 1. **Collide**: BGK relaxation of every cell.
/// 2. **Stream**: periodic shift of every channel.
/// 3. **Boundaries**: the scenario's edge rules.
/// 4. **Halo exchange** (partitioned backend only).
///
/// Snapshots are taken at step 0 and then every
/// `config.output_interval_steps` steps, and passed to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Grid size, step count, relaxation and snapshot interval.
    pub config: LbConfig,

    /// The physical setup this run was built from.
    pub scenario: Scenario,

    /// Edge treatments derived from `scenario`.
    pub boundaries: BoundarySet,

    backend: Backend,
    state:   SimState,
    step:    Step,
}

impl Sim {
    pub(crate) fn new(config: LbConfig, scenario: Scenario, boundaries: BoundarySet, backend: Backend) -> Self {
        Self { config, scenario, boundaries, backend, state: SimState::Configured, step: Step::ZERO }
    }

    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    #[inline]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    #[inline]
    pub fn is_partitioned(&self) -> bool {
        matches!(self.backend, Backend::Partitioned(_))
    }

    /// Run from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every batch boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.end_step() - self.step.min(self.config.end_step());
        self.run_steps(remaining, observer)
    }

    /// Run up to `n` steps from the current position, stopping early at
    /// `config.end_step()`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        if self.state == SimState::Finished {
            return Err(SimError::AlreadyFinished { step: self.step });
        }
        if self.state == SimState::Configured {
            self.state = SimState::Running;
            info!(scenario = self.scenario.name(), steps = self.config.steps, "run started");
            if self.step.is_snapshot(self.config.output_interval_steps) {
                self.snapshot(observer)?;
            }
        }

        let end = self.config.end_step();
        let target = Step(self.step.0.saturating_add(n).min(end.0));
        while self.step < target {
            let batch = self.batch_len(target);
            observer.on_step_start(self.step);
            self.advance(batch)?;
            self.step = self.step + batch;
            observer.on_step_end(self.step, batch);

            if self.step.is_snapshot(self.config.output_interval_steps) {
                self.snapshot(observer)?;
            }
        }

        if self.step >= end {
            self.state = SimState::Finished;
            info!(scenario = self.scenario.name(), step = %self.step, "run finished");
            observer.on_sim_end(self.step);
        }
        Ok(())
    }

    /// Density and velocity of the whole grid at the current step.
    pub fn fields(&self) -> SimResult<MacroFields> {
        match &self.backend {
            Backend::Serial(state) => Ok(MacroFields::from_populations(state.populations())),
            Backend::Partitioned(domain) => Ok(domain.fields()?),
        }
    }

    /// A copy of the global population grid.
    pub fn populations(&self) -> SimResult<Populations> {
        match &self.backend {
            Backend::Serial(state) => Ok(state.populations().clone()),
            Backend::Partitioned(domain) => Ok(domain.gather()?),
        }
    }

    pub fn density_at(&self, x: usize, y: usize) -> SimResult<f64> {
        self.with_cell(x, y, lattice::density)
    }

    pub fn velocity_at(&self, x: usize, y: usize) -> SimResult<[f64; 2]> {
        self.with_cell(x, y, |cell| lattice::moments(cell).1)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Steps to take before control returns to the loop.
    fn batch_len(&self, target: Step) -> u64 {
        match self.backend {
            Backend::Serial(_) => 1,
            Backend::Partitioned(_) => {
                let interval = self.config.output_interval_steps;
                let until_snapshot = if interval > 0 { interval - self.step.0 % interval } else { u64::MAX };
                until_snapshot.min(target - self.step)
            }
        }
    }

    fn advance(&mut self, steps: u64) -> SimResult<()> {
        let omega = self.config.omega;
        match &mut self.backend {
            Backend::Serial(state) => {
                for _ in 0..steps {
                    state.collide(omega);
                    state.stream();
                    let (f, f_post) = state.split_mut();
                    self.boundaries.apply_all(f, f_post);
                }
            }
            Backend::Partitioned(domain) => domain.advance(steps, omega)?,
        }
        Ok(())
    }

    fn snapshot<O: SimObserver>(&self, observer: &mut O) -> SimResult<()> {
        let fields = self.fields()?;
        debug!(step = %self.step, mass = fields.total_mass(), max_speed = fields.max_speed(), "snapshot");
        observer.on_snapshot(self.step, &fields);
        Ok(())
    }

    fn with_cell<R>(&self, x: usize, y: usize, read: impl FnOnce(&Cell) -> R) -> SimResult<R> {
        match &self.backend {
            Backend::Serial(state) => Ok(read(state.populations().get(x, y)?)),
            Backend::Partitioned(domain) => Ok(read(domain.gather()?.get(x, y)?)),
        }
    }
}

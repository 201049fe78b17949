//! Simulation observer trait for progress reporting and data collection.

use lb_core::{MacroFields, Step};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see the solver state only
/// through [`MacroFields`] snapshots and cannot alter it.
///
/// # Step batches
///
/// The serial backend advances one step at a time.  The partitioned backend
/// advances in batches that end at the next snapshot step (or the end of the
/// run), since every batch starts and joins one worker per partition.
/// `on_step_start`/`on_step_end` bracket each batch either way.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, step: Step, _advanced: u64) {
///         if step.0 % self.every == 0 {
///             println!("reached {step}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a batch of steps starting at `step`.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after a batch; `step` is the step reached and `advanced` the
    /// number of steps the batch took.
    fn on_step_end(&mut self, _step: Step, _advanced: u64) {}

    /// Called at step 0 and every `config.output_interval_steps` steps with
    /// the density and velocity of the whole grid.
    fn on_snapshot(&mut self, _step: Step, _fields: &MacroFields) {}

    /// Called once, when the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

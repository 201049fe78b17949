//! Fluent builder for constructing a [`Sim`].

use lb_core::LbConfig;
use lb_decomp::{PartitionedDomain, Topology};
use lb_solver::LatticeState;
use tracing::info;

use crate::sim::Backend;
use crate::{Scenario, Sim, SimError, SimResult};

/// Run the grid across `units` concurrently stepped partitions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decomposition {
    pub units: usize,

    /// Block layout.  `None` picks [`Topology::balanced`]; when given, its
    /// block count must equal `units`.
    pub topology: Option<Topology>,
}

impl Decomposition {
    /// `units` partitions in the most balanced layout.
    pub fn new(units: usize) -> Self {
        Self { units, topology: None }
    }

    /// An explicit block layout.
    pub fn with_topology(topology: Topology) -> Self {
        Self { units: topology.units(), topology: Some(topology) }
    }

    /// The block layout this decomposition runs on.
    pub fn resolve(&self) -> SimResult<Topology> {
        match self.topology {
            None => Ok(Topology::balanced(self.units)?),
            Some(t) if t.units() == self.units => Ok(t),
            Some(t) => Err(SimError::Config(format!(
                "topology {}x{} has {} blocks but {} units were requested",
                t.blocks_x,
                t.blocks_y,
                t.units(),
                self.units
            ))),
        }
    }
}

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`LbConfig`]: grid size, step count, `omega`, snapshot interval
/// - [`Scenario`]: initial condition and edge treatments
///
/// # Optional inputs
///
/// | Method                 | Default                     |
/// |------------------------|-----------------------------|
/// | `.decomposition(d)`    | serial run on one grid      |
///
/// # Example
///
/// ```rust,ignore
/// let config = LbConfig::new(100, 100, 10_000, 1.7);
/// let mut sim = SimBuilder::new(config, Scenario::SlidingLid { wall_velocity: 0.1 })
///     .decomposition(Decomposition::new(4))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        LbConfig,
    scenario:      Scenario,
    decomposition: Option<Decomposition>,
}

impl SimBuilder {
    pub fn new(config: LbConfig, scenario: Scenario) -> Self {
        Self { config, scenario, decomposition: None }
    }

    /// Split the grid across partitions stepped on their own threads.
    pub fn decomposition(mut self, decomposition: Decomposition) -> Self {
        self.decomposition = Some(decomposition);
        self
    }

    /// Validate every input, write the initial condition and return a
    /// [`Sim`] in the `Configured` state.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.scenario.validate()?;
        let boundaries = self.scenario.boundaries();
        boundaries.validate()?;

        let (nx, ny) = (self.config.nx, self.config.ny);
        let initial = self.scenario.initial(nx, ny);

        let backend = match self.decomposition {
            None => Backend::Serial(LatticeState::new(initial)),
            Some(d) => {
                let topology = d.resolve()?;
                Backend::Partitioned(PartitionedDomain::new(&initial, topology, boundaries)?)
            }
        };

        info!(
            scenario = self.scenario.name(),
            nx,
            ny,
            steps = self.config.steps,
            omega = self.config.omega,
            partitions = self.decomposition.map_or(1, |d| d.units),
            "simulation built"
        );
        Ok(Sim::new(self.config, self.scenario, boundaries, backend))
    }
}

//! Fluent builder for constructing a [`Sim`].

use ts_core::{LineColor, StationId, TransitConfig};
use ts_network::LineNetwork;
use ts_policy::TransportPolicy;
use ts_station::{StationRegistry, StationSpec};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`TransitConfig`]: speeds, capacities, spawn intervals, starting stock
/// - `P: TransportPolicy`: the docking policy (e.g.
///   [`ts_policy::ReachabilityPolicy`])
///
/// # Optional inputs
///
/// | Method              | Default           |
/// |---------------------|-------------------|
/// | `.station(spec)`    | no stations       |
/// | `.connect(a, b, c)` | no lines          |
///
/// Stations get ids in the order they are added.  Initial connections are
/// applied in order after every station is registered and consume stock
/// exactly like player connections.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, ReachabilityPolicy)
///     .station(StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)))
///     .station(StationSpec::new(StationShape::Square, Point2::new(100.0, 0.0)))
///     .connect(StationId(0), StationId(1), LineColor::Red)
///     .build()?;
/// ```
pub struct SimBuilder<P: TransportPolicy> {
    config:      TransitConfig,
    policy:      P,
    stations:    Vec<StationSpec>,
    connections: Vec<(StationId, StationId, LineColor)>,
}

impl<P: TransportPolicy> SimBuilder<P> {
    pub fn new(config: TransitConfig, policy: P) -> Self {
        Self { config, policy, stations: Vec::new(), connections: Vec::new() }
    }

    pub fn station(mut self, spec: StationSpec) -> Self {
        self.stations.push(spec);
        self
    }

    pub fn stations(mut self, specs: impl IntoIterator<Item = StationSpec>) -> Self {
        self.stations.extend(specs);
        self
    }

    pub fn connect(mut self, a: StationId, b: StationId, color: LineColor) -> Self {
        self.connections.push((a, b, color));
        self
    }

    /// Validate the config, register stations, apply the initial
    /// connections and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut registry = StationRegistry::new(
            self.config.seed,
            self.config.queue_capacity,
            self.config.crowding_threshold,
        );
        for spec in self.stations {
            registry.add_station(spec);
        }

        let mut network = LineNetwork::new(&self.config);
        for (a, b, color) in self.connections {
            for s in [a, b] {
                if !registry.contains(s) {
                    return Err(SimError::UnknownStation(s));
                }
            }
            if !network.try_connect(a, b, color) {
                return Err(SimError::ConnectionRejected { a, b, color });
            }
        }

        tracing::debug!(
            stations = registry.len(),
            lines = network.lines().len(),
            seed = self.config.seed,
            "simulation built",
        );
        Ok(Sim::from_parts(self.config, registry, network, self.policy))
    }
}

//! Unit tests for ts-mobility.
//!
//! Stations sit on a straight line 100 units apart and vehicles run at 60
//! units/s, so a segment takes two 1 s ticks (0.6, then clamped at 1).

#[cfg(test)]
mod helpers {
    use ts_core::{LineColor, Point2, StationId, StationShape, TransitConfig};
    use ts_network::{LineNetwork, NetworkGeometry};
    use ts_policy::ReachabilityPolicy;
    use ts_station::{StationRegistry, StationSpec};

    use crate::MobilityEngine;

    pub const A: StationId = StationId(0);
    pub const B: StationId = StationId(1);
    pub const C: StationId = StationId(2);

    pub fn config() -> TransitConfig {
        TransitConfig {
            vehicle_speed:      60.0,
            dock_duration_secs: 1.0,
            vehicle_capacity:   6,
            curve_subdivisions: 16,
            ..TransitConfig::default()
        }
    }

    pub struct World {
        pub stations: StationRegistry,
        pub network:  LineNetwork,
        pub geometry: NetworkGeometry,
    }

    impl World {
        pub fn rebuild(&mut self) {
            let cfg = config();
            self.geometry = NetworkGeometry::build(
                &self.network,
                &self.stations,
                cfg.lane_spacing,
                cfg.curve_subdivisions,
            );
        }
    }

    /// A circle (0,0), B square (100,0), C triangle (200,0); Red runs
    /// through `route` in order.
    pub fn world(route: &[StationId]) -> World {
        let cfg = config();
        let mut stations = StationRegistry::new(cfg.seed, 6, 10);
        stations.add_station(StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)));
        stations.add_station(StationSpec::new(StationShape::Square, Point2::new(100.0, 0.0)));
        stations.add_station(StationSpec::new(StationShape::Triangle, Point2::new(200.0, 0.0)));

        let mut network = LineNetwork::new(&cfg);
        for pair in route.windows(2) {
            assert!(network.try_connect(pair[0], pair[1], LineColor::Red));
        }
        let mut w = World { stations, network, geometry: NetworkGeometry::default() };
        w.rebuild();
        w
    }

    pub fn engine() -> MobilityEngine<ReachabilityPolicy> {
        MobilityEngine::new(ReachabilityPolicy, &config())
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use ts_network::{Direction, VehicleState};

    use super::helpers::{engine, world, A, B, C};
    use crate::MobilityError;

    #[test]
    fn new_vehicle_starts_docked_then_departs_forward() {
        let mut w = world(&[A, B]);
        assert_eq!(w.network.vehicles()[0].docked_station(), Some(A));

        engine().tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        let v = &w.network.vehicles()[0];
        assert_eq!(v.state, VehicleState::Moving);
        assert_eq!(v.direction, Direction::Forward);
        assert_eq!((v.segment, v.progress), (0, 0.0));
    }

    #[test]
    fn progress_follows_curve_length() {
        let mut w = world(&[A, B]);
        let e = engine();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        let p = w.network.vehicles()[0].progress;
        assert!((p - 0.6).abs() < 1e-3, "progress {p}");
    }

    #[test]
    fn reverses_at_terminus() {
        let mut w = world(&[A, B]);
        let e = engine();
        for _ in 0..3 {
            e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        }
        let v = &w.network.vehicles()[0];
        assert_eq!(v.docked_station(), Some(B));
        assert_eq!(v.progress, 1.0);

        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        let v = &w.network.vehicles()[0];
        assert_eq!(v.state, VehicleState::Moving);
        assert_eq!(v.direction, Direction::Backward);
        assert_eq!((v.segment, v.progress), (0, 1.0));
    }

    #[test]
    fn interior_station_keeps_direction() {
        let mut w = world(&[A, B, C]);
        let e = engine();
        for _ in 0..3 {
            e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        }
        assert_eq!(w.network.vehicles()[0].docked_station(), Some(B));

        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        let v = &w.network.vehicles()[0];
        assert_eq!(v.direction, Direction::Forward);
        assert_eq!((v.segment, v.progress), (1, 0.0));
    }

    #[test]
    fn segment_index_stays_in_range() {
        let mut w = world(&[A, B, C]);
        let e = engine();
        for _ in 0..200 {
            e.tick(&mut w.network, &w.geometry, &mut w.stations, 0.7).unwrap();
            let v = &w.network.vehicles()[0];
            assert!(v.segment <= 1);
            assert!((0.0..=1.0).contains(&v.progress));
        }
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut w = world(&[A, B]);
        let e = engine();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 0.0).unwrap();
        assert_eq!(w.network.vehicles()[0].progress, 0.0);
    }

    #[test]
    fn stale_geometry_is_an_error() {
        let mut w = world(&[A, B]);
        assert!(w.network.try_connect(B, C, ts_core::LineColor::Red));
        let err = engine().tick(&mut w.network, &w.geometry, &mut w.stations, 1.0);
        assert!(matches!(err, Err(MobilityError::StaleGeometry(_))));

        w.rebuild();
        assert!(engine().tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).is_ok());
    }
}

// ── Docking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod docking {
    use ts_core::{StationShape, Tick, TransitConfig};
    use ts_policy::{NoopPolicy, ReachabilityPolicy};
    use ts_station::RiderState;

    use super::helpers::{config, engine, world, A, B};
    use crate::MobilityEngine;

    #[test]
    fn initial_dock_boards_waiting_riders() {
        let mut w = world(&[A, B]);
        let id = w.stations.spawn_rider_to(A, StationShape::Square, Tick::ZERO).unwrap();

        let reports = engine().tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].station, A);
        assert_eq!(reports[0].boarded, vec![id]);

        let v = &w.network.vehicles()[0];
        assert_eq!(v.passengers[0].state, RiderState::OnVehicle);
        assert_eq!(w.stations.get(A).unwrap().queue_len(), 0);
    }

    #[test]
    fn rider_arrives_at_matching_station() {
        let mut w = world(&[A, B]);
        let id = w.stations.spawn_rider_to(A, StationShape::Square, Tick::ZERO).unwrap();
        let e = engine();

        let mut arrived = Vec::new();
        for _ in 0..3 {
            for r in e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap() {
                arrived.extend(r.arrived);
            }
        }
        assert_eq!(arrived.len(), 1);
        assert_eq!(arrived[0].id, id);
        assert_eq!(arrived[0].state, RiderState::Arrived);
        assert!(w.network.vehicles()[0].passengers.is_empty());
    }

    #[test]
    fn exchange_runs_once_per_dock() {
        let cfg = TransitConfig { dock_duration_secs: 3.0, ..config() };
        let e = MobilityEngine::new(ReachabilityPolicy, &cfg);
        let mut w = world(&[A, B]);

        assert_eq!(e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap().len(), 1);
        w.stations.spawn_rider_to(A, StationShape::Square, Tick(1)).unwrap();
        assert!(e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap().is_empty());
        assert_eq!(w.stations.get(A).unwrap().queue_len(), 1);
        assert!(w.network.vehicles()[0].is_docked());
    }

    #[test]
    fn boarding_never_exceeds_capacity() {
        let mut w = world(&[A, B]);
        for _ in 0..10 {
            w.stations.spawn_rider_to(A, StationShape::Square, Tick::ZERO).unwrap();
        }
        let e = engine();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        assert_eq!(w.network.vehicles()[0].passenger_count(), 6);
        assert_eq!(w.stations.get(A).unwrap().queue_len(), 4);

        for _ in 0..40 {
            e.tick(&mut w.network, &w.geometry, &mut w.stations, 0.5).unwrap();
            let v = &w.network.vehicles()[0];
            assert!(v.passenger_count() <= v.capacity as usize);
        }
    }

    #[test]
    fn noop_policy_moves_nobody() {
        let mut w = world(&[A, B]);
        w.stations.spawn_rider_to(A, StationShape::Square, Tick::ZERO).unwrap();
        let e = MobilityEngine::new(NoopPolicy, &config());

        let reports = e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        assert!(reports[0].boarded.is_empty());
        assert_eq!(w.stations.get(A).unwrap().queue_len(), 1);
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pose {
    use super::helpers::{engine, world, A, B};
    use crate::vehicle_pose;

    #[test]
    fn heading_follows_direction() {
        let mut w = world(&[A, B]);
        let e = engine();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        let fwd = vehicle_pose(&w.network.vehicles()[0], &w.geometry).unwrap();
        assert!(fwd.heading.x > 0.9);
        assert!((fwd.position.x - 60.0).abs() < 5.0);

        for _ in 0..3 {
            e.tick(&mut w.network, &w.geometry, &mut w.stations, 1.0).unwrap();
        }
        let back = vehicle_pose(&w.network.vehicles()[0], &w.geometry).unwrap();
        assert!(back.heading.x < -0.9);
    }
}

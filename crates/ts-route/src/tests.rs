//! Unit tests for ts-route.

#[cfg(test)]
mod helpers {
    use ts_core::{LineColor, Point2, StationId, StationShape, TransitConfig};
    use ts_network::LineNetwork;
    use ts_station::{StationRegistry, StationSpec};

    pub const A: StationId = StationId(0);
    pub const X: StationId = StationId(1);
    pub const B: StationId = StationId(2);
    pub const Y: StationId = StationId(3);
    pub const Z: StationId = StationId(4);

    /// Red `[A, X, B]`, Green `[X, Y]`; Z (locked pentagon) is on no line.
    ///
    /// Shapes: A circle, X square, B triangle, Y star, Z pentagon.
    pub fn interchange() -> (StationRegistry, LineNetwork) {
        let mut reg = StationRegistry::new(0, 6, 10);
        reg.add_station(StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Square, Point2::new(100.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Triangle, Point2::new(200.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Star, Point2::new(100.0, 100.0)));
        reg.add_station(StationSpec::new(StationShape::Pentagon, Point2::new(300.0, 0.0)).locked());

        let mut net = LineNetwork::new(&TransitConfig::default());
        assert!(net.try_connect(A, X, LineColor::Red));
        assert!(net.try_connect(X, B, LineColor::Red));
        assert!(net.try_connect(X, Y, LineColor::Green));
        (reg, net)
    }
}

#[cfg(test)]
mod reachability {
    use ts_core::{LineColor, StationId, StationShape};

    use super::helpers::{interchange, A, B, X, Y, Z};
    use crate::{can_reach, can_reach_shape, ReachMode, Target};

    #[test]
    fn transfer_through_shared_station() {
        let (reg, net) = interchange();
        assert!(can_reach_shape(A, StationShape::Star, ReachMode::UnlockedOnly, net.lines(), &reg));
        assert!(can_reach_shape(Y, StationShape::Triangle, ReachMode::UnlockedOnly, net.lines(), &reg));
    }

    #[test]
    fn disconnected_station_unreachable() {
        let (reg, net) = interchange();
        assert!(!can_reach_shape(A, StationShape::Pentagon, ReachMode::AllowLocked, net.lines(), &reg));
        assert!(!can_reach(A, Target::Station(Z), ReachMode::AllowLocked, net.lines(), &reg));
    }

    #[test]
    fn locked_target_only_in_lenient_mode() {
        let (reg, mut net) = interchange();
        assert!(net.try_connect(B, Z, LineColor::Red));
        assert!(!can_reach_shape(A, StationShape::Pentagon, ReachMode::UnlockedOnly, net.lines(), &reg));
        assert!(can_reach_shape(A, StationShape::Pentagon, ReachMode::AllowLocked, net.lines(), &reg));
    }

    #[test]
    fn start_station_counts() {
        let (reg, net) = interchange();
        assert!(can_reach_shape(X, StationShape::Square, ReachMode::UnlockedOnly, net.lines(), &reg));
    }

    #[test]
    fn unknown_start_is_false() {
        let (reg, net) = interchange();
        assert!(!can_reach_shape(StationId(99), StationShape::Circle, ReachMode::AllowLocked, net.lines(), &reg));
    }

    #[test]
    fn no_lines_only_start() {
        let (reg, _) = interchange();
        assert!(!can_reach_shape(A, StationShape::Square, ReachMode::AllowLocked, &[], &reg));
        assert!(can_reach_shape(A, StationShape::Circle, ReachMode::AllowLocked, &[], &reg));
    }

    #[test]
    fn pinned_target_ignores_other_stations_of_shape() {
        let (reg, net) = interchange();
        assert!(can_reach(A, Target::Station(Y), ReachMode::UnlockedOnly, net.lines(), &reg));
        assert!(!can_reach(A, Target::Station(Z), ReachMode::UnlockedOnly, net.lines(), &reg));
    }
}

#[cfg(test)]
mod soundness {
    use ts_core::{LineColor, Point2, StationId, StationShape, TransitConfig};
    use ts_network::{Line, LineNetwork};
    use ts_station::{StationRegistry, StationSpec};

    use crate::{can_reach_shape, ReachMode};

    /// Fixed-point closure over line edges, independent of the BFS.
    fn closure(start: StationId, lines: &[Line], n: usize) -> Vec<bool> {
        let mut seen = vec![false; n];
        seen[start.index()] = true;
        let mut changed = true;
        while changed {
            changed = false;
            for line in lines {
                for w in line.stations().windows(2) {
                    let (a, b) = (w[0].index(), w[1].index());
                    if seen[a] != seen[b] {
                        seen[a] = true;
                        seen[b] = true;
                        changed = true;
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn bfs_agrees_with_closure() {
        let mut reg = StationRegistry::new(0, 6, 10);
        for i in 0..8u32 {
            let shape = StationShape::ALL[i as usize];
            reg.add_station(StationSpec::new(shape, Point2::new(i as f32 * 10.0, 0.0)));
        }
        let cfg = TransitConfig {
            initial_vehicle_stock: 6,
            initial_line_cap:      6,
            ..TransitConfig::default()
        };
        let mut net = LineNetwork::new(&cfg);
        net.try_connect(StationId(0), StationId(1), LineColor::Red);
        net.try_connect(StationId(1), StationId(2), LineColor::Red);
        net.try_connect(StationId(3), StationId(4), LineColor::Blue);
        net.try_connect(StationId(2), StationId(5), LineColor::Green);
        net.try_connect(StationId(6), StationId(7), LineColor::Yellow);
        net.try_connect(StationId(4), StationId(6), LineColor::Yellow);

        for s in 0..8u32 {
            let start = StationId(s);
            let seen = closure(start, net.lines(), reg.len());
            for shape in StationShape::ALL {
                let expected = reg.iter().any(|st| st.shape == shape && seen[st.id.index()]);
                let got = can_reach_shape(start, shape, ReachMode::AllowLocked, net.lines(), &reg);
                assert_eq!(got, expected, "start {start} shape {shape}");
            }
        }
    }
}

#[cfg(test)]
mod line_helpers {
    use ts_core::{LineId, StationShape};

    use super::helpers::{interchange, A, B, X, Y};
    use crate::{is_interchange, line_serves, ReachMode, Target};

    #[test]
    fn serves_only_own_stations() {
        let (reg, net) = interchange();
        let red = &net.lines()[0];
        assert!(line_serves(red, Target::Shape(StationShape::Triangle), ReachMode::AllowLocked, &reg));
        assert!(!line_serves(red, Target::Shape(StationShape::Star), ReachMode::AllowLocked, &reg));
    }

    #[test]
    fn interchange_needs_two_lines() {
        let (_, net) = interchange();
        assert!(is_interchange(X, LineId(0), net.lines()));
        assert!(is_interchange(X, LineId(1), net.lines()));
        assert!(!is_interchange(A, LineId(0), net.lines()));
        assert!(!is_interchange(B, LineId(0), net.lines()));
        assert!(!is_interchange(Y, LineId(1), net.lines()));
    }
}

//! Unit tests for ts-station.

#[cfg(test)]
mod helpers {
    use ts_core::{Point2, StationShape};

    use crate::{StationRegistry, StationSpec};

    /// Circle, triangle and square stations, all unlocked, plus a locked star.
    pub fn registry() -> StationRegistry {
        let mut reg = StationRegistry::new(42, 6, 10);
        reg.add_station(StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Triangle, Point2::new(100.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Square, Point2::new(200.0, 0.0)));
        reg.add_station(StationSpec::new(StationShape::Star, Point2::new(300.0, 0.0)).locked());
        reg
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use ts_core::{Point2, StationId, StationShape};

    use crate::{StationRegistry, StationSpec};

    #[test]
    fn ids_are_sequential() {
        let mut reg = StationRegistry::new(0, 6, 10);
        let a = reg.add_station(StationSpec::new(StationShape::Circle, Point2::ZERO));
        let b = reg.add_station(StationSpec::new(StationShape::Square, Point2::ZERO));
        assert_eq!(a, StationId(0));
        assert_eq!(b, StationId(1));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(b).unwrap().queue_capacity, 6);
        assert_eq!(reg.get(b).unwrap().crowding_threshold, 10);
    }

    #[test]
    fn unlocked_shapes_skip_locked() {
        let reg = super::helpers::registry();
        assert_eq!(
            reg.unlocked_shapes(),
            vec![StationShape::Circle, StationShape::Triangle, StationShape::Square]
        );
    }

    #[test]
    fn unlock_once() {
        let mut reg = super::helpers::registry();
        assert!(reg.unlock(StationId(3)));
        assert!(!reg.unlock(StationId(3)));
        assert!(!reg.unlock(StationId(99)));
        assert!(reg.unlocked_shapes().contains(&StationShape::Star));
    }

    #[test]
    fn unknown_station_lookup() {
        let reg = super::helpers::registry();
        assert!(reg.get(StationId(99)).is_none());
        assert!(reg.pos(StationId(99)).is_none());
        assert!(!reg.contains(StationId(4)));
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use ts_core::{StationId, StationShape, Tick};

    use crate::RiderState;

    #[test]
    fn queue_is_fifo_and_slots_follow_order() {
        let mut reg = super::helpers::registry();
        let r0 = reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap();
        let r1 = reg.spawn_rider_to(StationId(0), StationShape::Triangle, Tick(0)).unwrap();
        let r2 = reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap();

        let st = reg.get(StationId(0)).unwrap();
        assert_eq!(st.queue_len(), 3);
        assert_eq!(st.queue_slot(r0), Some(0));
        assert_eq!(st.queue_slot(r1), Some(1));
        assert_eq!(st.queue_slot(r2), Some(2));
        assert!(st.queue().iter().all(|r| r.state == RiderState::Waiting));
    }

    #[test]
    fn take_riders_preserves_order() {
        let mut reg = super::helpers::registry();
        let ids: Vec<_> = (0..4)
            .map(|_| reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap())
            .collect();
        let st = reg.get_mut(StationId(0)).unwrap();

        let taken = st.take_riders(&[ids[3], ids[1]]);
        assert_eq!(taken.iter().map(|r| r.id).collect::<Vec<_>>(), vec![ids[1], ids[3]]);
        assert_eq!(st.queue().iter().map(|r| r.id).collect::<Vec<_>>(), vec![ids[0], ids[2]]);
        assert_eq!(st.queue_slot(ids[2]), Some(1));
    }

    #[test]
    fn pushed_rider_is_reset_to_waiting() {
        let mut reg = super::helpers::registry();
        let id = reg.spawn_rider_to(StationId(1), StationShape::Circle, Tick(0)).unwrap();
        let st = reg.get_mut(StationId(1)).unwrap();
        assert!(st.take_riders(&[]).is_empty());

        let mut rider = st.take_riders(&[id]).pop().unwrap();
        assert_eq!(st.queue_len(), 0);
        rider.state = RiderState::OnVehicle;
        st.push_rider(rider);
        assert_eq!(st.queue()[0].state, RiderState::Waiting);
    }

    #[test]
    fn scripted_rider_for_own_shape_is_refused() {
        let mut reg = super::helpers::registry();
        assert_eq!(reg.spawn_rider_to(StationId(0), StationShape::Circle, Tick(0)), None);
        assert_eq!(reg.spawn_rider_to(StationId(99), StationShape::Square, Tick(0)), None);
        assert_eq!(reg.get(StationId(0)).unwrap().queue_len(), 0);
    }
}

// ── Destination matching ──────────────────────────────────────────────────────

#[cfg(test)]
mod destination {
    use ts_core::{Point2, RiderId, StationId, StationShape, Tick};

    use crate::{Rider, StationRegistry, StationSpec};

    #[test]
    fn shape_only_rider_matches_any_station_of_shape() {
        let rider = Rider::new(RiderId(0), StationId(0), StationShape::Square, None, Tick(0));
        assert!(rider.is_destination(StationShape::Square));
        assert!(!rider.is_destination(StationShape::Circle));
    }

    #[test]
    fn pinned_rider_alights_at_any_station_of_shape() {
        let mut reg = super::helpers::registry();
        reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap();
        let extra = reg.add_station(StationSpec::new(StationShape::Square, Point2::new(0.0, 100.0)));

        let rider = reg.get(StationId(0)).unwrap().queue()[0].clone();
        assert_eq!(rider.target_station, Some(StationId(2)));
        assert!(reg.get(extra).unwrap().is_destination_for(&rider));
        assert!(reg.get(StationId(2)).unwrap().is_destination_for(&rider));
    }

    #[test]
    fn single_station_of_shape_is_pinned() {
        let mut reg = super::helpers::registry();
        let id = reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap();
        let rider = reg.get(StationId(0)).unwrap().queue().iter().find(|r| r.id == id).unwrap();
        assert_eq!(rider.target_station, Some(StationId(2)));
    }

    #[test]
    fn shared_shape_is_not_pinned() {
        let mut reg = super::helpers::registry();
        reg.add_station(StationSpec::new(StationShape::Square, Point2::new(0.0, 100.0)));
        let id = reg.spawn_rider_to(StationId(0), StationShape::Square, Tick(0)).unwrap();
        let rider = reg.get(StationId(0)).unwrap().queue().iter().find(|r| r.id == id).unwrap();
        assert_eq!(rider.target_station, None);
    }

    #[test]
    fn empty_registry_has_no_stations_of_shape() {
        let reg = StationRegistry::new(0, 6, 10);
        assert!(reg.stations_with_shape(StationShape::Circle).is_empty());
    }
}

// ── Spawn timers ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawning {
    use ts_core::{StationId, StationShape, Tick};

    #[test]
    fn nothing_before_interval() {
        let mut reg = super::helpers::registry();
        assert!(reg.tick_spawns(1.0, 5.0, Tick(0)).is_empty());
        assert_eq!(reg.total_waiting(), 0);
    }

    #[test]
    fn one_rider_per_unlocked_station_per_interval() {
        let mut reg = super::helpers::registry();
        let mut events = Vec::new();
        for t in 0..5 {
            events.extend(reg.tick_spawns(1.0, 5.0, Tick(t)));
        }
        // Three unlocked stations; the locked star never spawns.
        assert_eq!(events.len(), 3);
        assert_eq!(reg.get(StationId(3)).unwrap().queue_len(), 0);
    }

    #[test]
    fn large_step_spawns_multiple() {
        let mut reg = super::helpers::registry();
        let events = reg.tick_spawns(10.0, 5.0, Tick(0));
        assert_eq!(events.len(), 6);
        assert_eq!(reg.get(StationId(0)).unwrap().queue_len(), 2);
    }

    #[test]
    fn target_never_own_shape_and_always_unlocked() {
        let mut reg = super::helpers::registry();
        for t in 0..200 {
            reg.tick_spawns(1.0, 1.0, Tick(t));
        }
        let unlocked = reg.unlocked_shapes();
        for st in reg.iter() {
            for rider in st.queue() {
                assert_ne!(rider.target_shape, st.shape);
                assert!(unlocked.contains(&rider.target_shape));
                assert_ne!(rider.target_shape, StationShape::Star);
            }
        }
    }

    #[test]
    fn spawning_is_deterministic() {
        let mut a = super::helpers::registry();
        let mut b = super::helpers::registry();
        for t in 0..50 {
            a.tick_spawns(0.5, 1.0, Tick(t));
            b.tick_spawns(0.5, 1.0, Tick(t));
        }
        for (sa, sb) in a.iter().zip(b.iter()) {
            let ta: Vec<_> = sa.queue().iter().map(|r| r.target_shape).collect();
            let tb: Vec<_> = sb.queue().iter().map(|r| r.target_shape).collect();
            assert_eq!(ta, tb);
        }
    }

    #[test]
    fn no_other_shape_means_no_spawn() {
        use ts_core::Point2;
        use crate::{StationRegistry, StationSpec};

        let mut reg = StationRegistry::new(1, 6, 10);
        reg.add_station(StationSpec::new(StationShape::Circle, Point2::ZERO));
        reg.add_station(StationSpec::new(StationShape::Circle, Point2::new(50.0, 0.0)));
        assert!(reg.tick_spawns(3.0, 1.0, Tick(0)).is_empty());
        assert!(reg.spawn_rider(StationId(0), Tick(0)).is_none());
    }
}

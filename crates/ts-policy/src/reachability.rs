//! The default graph-driven policy.
//!
//! Three passes over a single snapshot, in priority order:
//!
//! 1. **Alight**: every passenger whose target shape is this station's
//!    shape, pinned or not.
//! 2. **Transfer**: of the rest, a passenger steps off when its line
//!    cannot take it to the target, the station is an interchange, and the
//!    target is reachable from here over the whole network.
//! 3. **Board**: queue riders in FIFO order whose target is reachable from
//!    here, until the seats freed by passes 1 and 2 run out.  A queued rider
//!    whose target shape is this station's shape never boards.
//!
//! Transfer and board checks use [`ReachMode::AllowLocked`] so riders may
//! head for a destination that has not opened yet.
//!
//! A rider that transferred off this vehicle's line does not board that
//! line again until the line itself serves its target.

use ts_route::{can_reach, is_interchange, line_serves, ReachMode, Target};

use crate::{DockContext, DockPlan, TransportPolicy};

#[derive(Copy, Clone, Debug, Default)]
pub struct ReachabilityPolicy;

impl TransportPolicy for ReachabilityPolicy {
    fn plan(&self, ctx: &DockContext<'_>) -> DockPlan {
        let mode = ReachMode::AllowLocked;
        let station = ctx.station;
        let mut plan = DockPlan::default();

        // ── 1. Destination ────────────────────────────────────────────────
        plan.alight = ctx
            .vehicle
            .passengers
            .iter()
            .filter(|r| station.is_destination_for(r))
            .map(|r| r.id)
            .collect();

        // ── 2. Transfer ───────────────────────────────────────────────────
        if is_interchange(station.id, ctx.line.id, ctx.lines) {
            plan.transfer = ctx
                .vehicle
                .passengers
                .iter()
                .filter(|r| !plan.alight.contains(&r.id))
                .filter(|r| {
                    let target = Target::for_rider(r);
                    !line_serves(ctx.line, target, mode, ctx.stations)
                        && can_reach(station.id, target, mode, ctx.lines, ctx.stations)
                })
                .map(|r| r.id)
                .collect();
        }

        // ── 3. Board ──────────────────────────────────────────────────────
        let staying = ctx.vehicle.passengers.len() - plan.alight.len() - plan.transfer.len();
        let mut seats = (ctx.vehicle.capacity as usize).saturating_sub(staying);
        for rider in station.queue() {
            if seats == 0 {
                break;
            }
            if station.is_destination_for(rider) {
                continue;
            }
            let target = Target::for_rider(rider);
            if rider.alighted_from == Some(ctx.line.id)
                && !line_serves(ctx.line, target, mode, ctx.stations)
            {
                continue;
            }
            if can_reach(station.id, target, mode, ctx.lines, ctx.stations) {
                plan.board.push(rider.id);
                seats -= 1;
            }
        }

        plan
    }
}

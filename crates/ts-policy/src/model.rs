//! The `TransportPolicy` trait.

use crate::{DockContext, DockPlan};

/// Decides the rider exchange for one docking event.
///
/// Implementations return three disjoint sets of rider ids: `alight` and
/// `transfer` drawn from the vehicle's passengers, `board` drawn from the
/// station queue.  The applier boards at most as many riders as there are
/// free seats after `alight` and `transfer`, taking them from the front of
/// `board`.
pub trait TransportPolicy {
    fn plan(&self, ctx: &DockContext<'_>) -> DockPlan;
}

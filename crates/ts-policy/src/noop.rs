//! A policy that never moves anyone.

use crate::{DockContext, DockPlan, TransportPolicy};

/// Leaves every rider where it is.  Useful for movement-only tests.
pub struct NoopPolicy;

impl TransportPolicy for NoopPolicy {
    #[inline]
    fn plan(&self, _ctx: &DockContext<'_>) -> DockPlan {
        DockPlan::default()
    }
}

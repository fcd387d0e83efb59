//! Output of a policy decision.

use ts_core::RiderId;

/// Riders to move at one docking event, in the order they are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DockPlan {
    /// Onboard riders whose trip ends here.
    pub alight: Vec<RiderId>,
    /// Onboard riders who step off to wait for another line.
    pub transfer: Vec<RiderId>,
    /// Waiting riders who get on, in queue order.
    pub board: Vec<RiderId>,
}

impl DockPlan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alight.is_empty() && self.transfer.is_empty() && self.board.is_empty()
    }
}

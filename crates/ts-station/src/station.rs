//! A single station and its FIFO rider queue.

use ts_core::{Point2, RiderId, StationId, StationShape};

use crate::{Rider, RiderState};

/// A station.  Created at level load or while running; never destroyed.
#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationId,
    pub shape: StationShape,
    pub pos: Point2,

    /// Locked stations spawn no riders and are not valid strict-mode
    /// destinations.
    pub unlocked: bool,

    /// Soft limits read by the game loop.  Not enforced here.
    pub queue_capacity: u32,
    pub crowding_threshold: u32,

    /// Waiting riders.  Insertion order is boarding priority.
    queue: Vec<Rider>,

    /// Seconds accumulated towards the next spawn.
    pub(crate) spawn_elapsed: f32,
}

impl Station {
    pub(crate) fn new(
        id:                 StationId,
        shape:              StationShape,
        pos:                Point2,
        unlocked:           bool,
        queue_capacity:     u32,
        crowding_threshold: u32,
    ) -> Self {
        Self {
            id,
            shape,
            pos,
            unlocked,
            queue_capacity,
            crowding_threshold,
            queue: Vec::new(),
            spawn_elapsed: 0.0,
        }
    }

    /// Waiting riders in boarding order.
    #[inline]
    pub fn queue(&self) -> &[Rider] {
        &self.queue
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Position of `rider` in the queue, used as its render offset.
    pub fn queue_slot(&self, rider: RiderId) -> Option<usize> {
        self.queue.iter().position(|r| r.id == rider)
    }

    /// `true` if this station ends `rider`'s trip.
    #[inline]
    pub fn is_destination_for(&self, rider: &Rider) -> bool {
        rider.is_destination(self.shape)
    }

    /// Append `rider` to the back of the queue, marking it `Waiting`.
    pub fn push_rider(&mut self, mut rider: Rider) {
        rider.state = RiderState::Waiting;
        self.queue.push(rider);
    }

    /// Remove the riders whose ids appear in `ids`, keeping queue order for
    /// both the removed riders and those left behind.
    pub fn take_riders(&mut self, ids: &[RiderId]) -> Vec<Rider> {
        if ids.is_empty() {
            return Vec::new();
        }
        let (taken, kept): (Vec<Rider>, Vec<Rider>) = std::mem::take(&mut self.queue)
            .into_iter()
            .partition(|r| ids.contains(&r.id));
        self.queue = kept;
        taken
    }
}

//! Capacity classification.
//!
//! Sorts the shuffled pool into three FIFO buckets by whether each
//! participant declared enough seats to host every course:
//! - **can host**: declared seats ≥ `team_size * course_count`
//! - **cannot host**: declared seats below that threshold
//! - **unknown**: no declared capacity

use std::collections::VecDeque;

use dinner_core::{HostingCapability, SeatCapacity};
use tracing::debug;

use crate::model::Assignable;

/// Participants bucketed by hosting capability. Each bucket keeps the
/// order in which participants were classified.
#[derive(Debug)]
pub struct CapacityBuckets<P> {
    pub can_host: VecDeque<P>,
    pub cannot_host: VecDeque<P>,
    pub unknown: VecDeque<P>,
}

impl<P> CapacityBuckets<P> {
    pub fn len(&self) -> usize {
        self.can_host.len() + self.cannot_host.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn hosting_capability(seats: SeatCapacity, needed_seats: u32) -> HostingCapability {
    match seats {
        SeatCapacity::Undefined => HostingCapability::Unknown,
        SeatCapacity::Seats(n) if n >= needed_seats => HostingCapability::Yes,
        SeatCapacity::Seats(_) => HostingCapability::No,
    }
}

pub fn classify<P: Assignable>(pool: Vec<P>, needed_seats: u32) -> CapacityBuckets<P> {
    let mut buckets = CapacityBuckets {
        can_host: VecDeque::new(),
        cannot_host: VecDeque::new(),
        unknown: VecDeque::new(),
    };

    for participant in pool {
        match hosting_capability(participant.seats(), needed_seats) {
            HostingCapability::Yes => buckets.can_host.push_back(participant),
            HostingCapability::No => buckets.cannot_host.push_back(participant),
            HostingCapability::Unknown => buckets.unknown.push_back(participant),
        }
    }

    debug!(
        needed_seats,
        can_host = buckets.can_host.len(),
        cannot_host = buckets.cannot_host.len(),
        unknown = buckets.unknown.len(),
        "classified participants by seat capacity"
    );

    buckets
}

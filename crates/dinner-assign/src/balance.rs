//! Greedy redistribution between the two hosting queues.
//!
//! Each element goes to the left queue while it is strictly shorter than
//! the right one, otherwise to the right queue. The decision only looks at
//! the running sizes, so the two queues can end up one apart.

use std::collections::VecDeque;

use tracing::debug;

use crate::classify::CapacityBuckets;

/// The two queues the assembler draws from.
///
/// With count-only balancing the names are positional: both halves hold
/// participants regardless of their capacity.
#[derive(Debug)]
pub struct BalancedQueues<P> {
    pub can_host: VecDeque<P>,
    pub cannot_host: VecDeque<P>,
}

impl<P> BalancedQueues<P> {
    pub fn len(&self) -> usize {
        self.can_host.len() + self.cannot_host.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn distribute_equally<T, I>(left: &mut VecDeque<T>, source: I, right: &mut VecDeque<T>)
where
    I: IntoIterator<Item = T>,
{
    for item in source {
        if left.len() < right.len() {
            left.push_back(item);
        } else {
            right.push_back(item);
        }
    }
}

/// Move the unknown-capacity bucket into the two classified queues.
pub fn balance_unknown<P>(buckets: CapacityBuckets<P>) -> BalancedQueues<P> {
    let CapacityBuckets {
        mut can_host,
        mut cannot_host,
        unknown,
    } = buckets;
    let unknown_count = unknown.len();

    distribute_equally(&mut can_host, unknown, &mut cannot_host);

    debug!(
        unknown = unknown_count,
        can_host = can_host.len(),
        cannot_host = cannot_host.len(),
        "balanced unknown-capacity participants"
    );

    BalancedQueues {
        can_host,
        cannot_host,
    }
}

/// Split the whole pool into two fresh queues, ignoring capacity.
pub fn balance_by_count<P>(pool: Vec<P>) -> BalancedQueues<P> {
    let mut can_host = VecDeque::with_capacity(pool.len() / 2 + 1);
    let mut cannot_host = VecDeque::with_capacity(pool.len() / 2 + 1);

    distribute_equally(&mut can_host, pool, &mut cannot_host);

    debug!(
        left = can_host.len(),
        right = cannot_host.len(),
        "balanced pool by count"
    );

    BalancedQueues {
        can_host,
        cannot_host,
    }
}

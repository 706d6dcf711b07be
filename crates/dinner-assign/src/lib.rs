//! Running dinner team assignment.
//!
//! Partitions a participant pool into fixed-size teams while spreading
//! participants who can host a course evenly across those teams. It does
//! NOT decide which team hosts which course or route guests between hosts;
//! it only produces the teams and the participants left over.
//!
//! # Components
//!
//! - **`builder`** — Feasibility check, pool split, and the `build_teams` pipeline
//! - **`classify`** — Seat-capacity buckets (can host, cannot host, unknown)
//! - **`balance`** — Greedy running-count redistribution between two queues
//! - **`assemble`** — Alternating team assembly from the balanced queues
//! - **`random`** — Injected shuffle source
//! - **`convert`** — Conversions from `dinner_core` types

pub mod assemble;
pub mod balance;
pub mod builder;
pub mod classify;
pub mod convert;
pub mod error;
pub mod model;
pub mod random;

#[cfg(test)]
mod testing;

pub use assemble::{Side, assemble_teams};
pub use balance::{BalancedQueues, balance_by_count, balance_unknown, distribute_equally};
pub use builder::{PoolSplit, build_teams, check_feasible, split_pool};
pub use classify::{CapacityBuckets, classify, hosting_capability};
pub use error::{AssignError, AssignResult};
pub use model::{Assignable, AssignmentConfig, AssignmentResult, Team};
pub use random::{KeepOrder, RandomSource, RngSource};

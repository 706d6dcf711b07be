//! Team assembly from the two balanced queues.
//!
//! Every team starts drawing from the can-host queue and alternates sides
//! after each slot. When the active side is empty the slot is filled from
//! the other side instead. Earlier teams get first pick of both queues.

use tracing::debug;

use crate::balance::BalancedQueues;
use crate::error::{AssignError, AssignResult};
use crate::model::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    CanHost,
    CannotHost,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::CanHost => Side::CannotHost,
            Side::CannotHost => Side::CanHost,
        }
    }
}

impl<P> BalancedQueues<P> {
    pub fn poll(&mut self, side: Side) -> Option<P> {
        match side {
            Side::CanHost => self.can_host.pop_front(),
            Side::CannotHost => self.cannot_host.pop_front(),
        }
    }
}

/// Draw `num_teams` teams of `team_size` members from `queues`.
///
/// Each queue hands out an element at most once, so a participant ends up
/// in at most one team as long as the queues hold no duplicates.
pub fn assemble_teams<P>(
    queues: &mut BalancedQueues<P>,
    num_teams: usize,
    team_size: usize,
) -> AssignResult<Vec<Team<P>>> {
    let mut teams = Vec::with_capacity(num_teams);

    for index in 0..num_teams {
        let number = (index + 1) as u32;
        let mut members = Vec::with_capacity(team_size);
        let mut active = Side::CanHost;

        for slot in 0..team_size {
            let polled = queues.poll(active);
            active = active.other();

            let member = match polled {
                Some(member) => member,
                None => queues
                    .poll(active)
                    .ok_or(AssignError::TeamAssemblyExhausted {
                        team: number,
                        slot: slot + 1,
                    })?,
            };
            members.push(member);
        }

        debug!(team = number, members = members.len(), "assembled team");
        teams.push(Team { number, members });
    }

    Ok(teams)
}

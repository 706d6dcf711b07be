//! Team-building pipeline.
//!
//! Given a participant list and an [`AssignmentConfig`], the builder:
//! 1. Rejects configurations that cannot form a single team
//! 2. Sets aside the participants that do not fill a complete team
//! 3. Shuffles the remaining pool
//! 4. Classifies and balances it into two hosting queues
//! 5. Assembles numbered teams from those queues

use std::collections::HashSet;

use tracing::{debug, info};

use crate::assemble::assemble_teams;
use crate::balance::{balance_by_count, balance_unknown};
use crate::classify::classify;
use crate::error::{AssignError, AssignResult};
use crate::model::{Assignable, AssignmentConfig, AssignmentResult};
use crate::random::RandomSource;

/// Participants split into the part that forms full teams and the rest.
#[derive(Debug, Clone)]
pub struct PoolSplit<P> {
    pub assignable: Vec<P>,
    pub not_assigned: Vec<P>,
    pub num_teams: usize,
}

pub fn check_feasible(participant_count: usize, team_size: u32) -> AssignResult<()> {
    if team_size as usize >= participant_count {
        return Err(AssignError::InfeasibleConfiguration {
            team_size,
            participants: participant_count,
        });
    }
    Ok(())
}

/// Keep the longest prefix whose size is a multiple of `team_size`; the
/// trailing remainder is not assigned.
pub fn split_pool<P: Clone>(participants: &[P], team_size: u32) -> PoolSplit<P> {
    let team_size = team_size.max(1) as usize;
    let num_teams = participants.len() / team_size;
    let (assignable, rest) = participants.split_at(num_teams * team_size);

    PoolSplit {
        assignable: assignable.to_vec(),
        not_assigned: rest.to_vec(),
        num_teams,
    }
}

fn check_unique<P: Assignable>(participants: &[P]) -> AssignResult<()> {
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        let id = p.id();
        if !seen.insert(id.clone()) {
            return Err(AssignError::DuplicateParticipant(format!("{id:?}")));
        }
    }
    Ok(())
}

/// Partition `participants` into teams of `config.team_size`.
///
/// The result is random unless `rng` is seeded or preserves order.
pub fn build_teams<P, R>(
    participants: &[P],
    config: &AssignmentConfig,
    rng: &mut R,
) -> AssignResult<AssignmentResult<P>>
where
    P: Assignable + Clone,
    R: RandomSource,
{
    config.validate()?;
    check_unique(participants)?;
    check_feasible(participants.len(), config.team_size)?;

    let PoolSplit {
        mut assignable,
        not_assigned,
        num_teams,
    } = split_pool(participants, config.team_size);

    debug!(
        participants = participants.len(),
        num_teams,
        not_assigned = not_assigned.len(),
        "split participant pool"
    );

    rng.shuffle(&mut assignable);

    let mut queues = if config.strict_capacity_balancing {
        balance_unknown(classify(assignable, config.needed_seats()))
    } else {
        balance_by_count(assignable)
    };

    let teams = assemble_teams(&mut queues, num_teams, config.team_size as usize)?;

    info!(
        teams = teams.len(),
        team_size = config.team_size,
        not_assigned = not_assigned.len(),
        strict = config.strict_capacity_balancing,
        "built teams"
    );

    Ok(AssignmentResult {
        teams,
        not_assigned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{KeepOrder, RngSource};
    use crate::testing::Guest;

    #[test]
    fn feasible_only_when_team_size_below_count() {
        assert!(check_feasible(6, 2).is_ok());
        assert!(check_feasible(3, 2).is_ok());
        assert_eq!(
            check_feasible(2, 2),
            Err(AssignError::InfeasibleConfiguration { team_size: 2, participants: 2 })
        );
        assert!(check_feasible(1, 2).is_err());
        assert!(check_feasible(0, 1).is_err());
    }

    #[test]
    fn split_sets_aside_trailing_remainder() {
        let ids: Vec<u32> = (1..=11).collect();
        let split = split_pool(&ids, 3);
        assert_eq!(split.num_teams, 3);
        assert_eq!(split.assignable, (1..=9).collect::<Vec<_>>());
        assert_eq!(split.not_assigned, vec![10, 11]);
    }

    #[test]
    fn split_without_remainder_keeps_everyone() {
        let ids: Vec<u32> = (1..=8).collect();
        let split = split_pool(&ids, 2);
        assert_eq!(split.num_teams, 4);
        assert_eq!(split.assignable.len(), 8);
        assert!(split.not_assigned.is_empty());
    }

    #[test]
    fn rejects_zero_sized_config() {
        let guests = Guest::all_unknown(4);
        let config = AssignmentConfig::new(0, 3, true);
        assert!(matches!(
            build_teams(&guests, &config, &mut KeepOrder),
            Err(AssignError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_duplicate_identities() {
        let guests = vec![Guest::unknown(1), Guest::unknown(2), Guest::unknown(1)];
        let config = AssignmentConfig::new(1, 3, true);
        assert_eq!(
            build_teams(&guests, &config, &mut KeepOrder).unwrap_err(),
            AssignError::DuplicateParticipant("1".into())
        );
    }

    #[test]
    fn strict_mode_pairs_hosts_with_non_hosts() {
        // needed seats = 2 * 3 = 6
        let guests = vec![
            Guest::with_seats(1, 6),
            Guest::with_seats(2, 2),
            Guest::with_seats(3, 8),
            Guest::with_seats(4, 0),
        ];
        let config = AssignmentConfig::new(2, 3, true);

        let result = build_teams(&guests, &config, &mut KeepOrder).unwrap();

        let ids: Vec<Vec<u32>> = result
            .teams
            .iter()
            .map(|t| t.members.iter().map(|g| g.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn count_mode_ignores_capacity() {
        let guests = vec![
            Guest::with_seats(1, 10),
            Guest::with_seats(2, 10),
            Guest::with_seats(3, 0),
            Guest::with_seats(4, 0),
        ];
        let config = AssignmentConfig::new(2, 3, false);

        let result = build_teams(&guests, &config, &mut KeepOrder).unwrap();

        // count split: right gets 1 and 3, left gets 2 and 4
        let ids: Vec<Vec<u32>> = result
            .teams
            .iter()
            .map(|t| t.members.iter().map(|g| g.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![2, 1], vec![4, 3]]);
    }

    #[test]
    fn same_seed_same_teams() {
        let guests: Vec<Guest> = (1..=20).map(|i| Guest::with_seats(i, i % 9)).collect();
        let config = AssignmentConfig::new(2, 3, true);

        let a = build_teams(&guests, &config, &mut RngSource::seeded(42)).unwrap();
        let b = build_teams(&guests, &config, &mut RngSource::seeded(42)).unwrap();

        let ids = |r: &AssignmentResult<Guest>| -> Vec<Vec<u32>> {
            r.teams.iter().map(|t| t.members.iter().map(|g| g.id).collect()).collect()
        };
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn not_assigned_comes_from_original_order() {
        let guests: Vec<Guest> = (1..=7).map(Guest::unknown).collect();
        let config = AssignmentConfig::new(3, 3, true);

        let result = build_teams(&guests, &config, &mut RngSource::seeded(3)).unwrap();

        assert_eq!(result.teams.len(), 2);
        assert_eq!(result.not_assigned.iter().map(|g| g.id).collect::<Vec<_>>(), vec![7]);
    }
}

//! Inputs and outputs of team assignment.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use dinner_core::SeatCapacity;
use serde::Serialize;

use crate::error::{AssignError, AssignResult};

/// A participant-like record the assigner can place into a team.
///
/// Set membership is decided by [`Assignable::id`] alone.
pub trait Assignable {
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;
    fn seats(&self) -> SeatCapacity;
}

/// Parameters of a single team-building run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentConfig {
    /// Participants per team.
    pub team_size: u32,
    /// Courses in the event; drives the hosting seat threshold.
    pub course_count: u32,
    /// When true, only participants with a declared capacity are
    /// classified up front and the undeclared ones are balanced in
    /// afterwards. When false, the whole pool is balanced by count.
    pub strict_capacity_balancing: bool,
}

impl AssignmentConfig {
    pub fn new(team_size: u32, course_count: u32, strict_capacity_balancing: bool) -> Self {
        Self {
            team_size,
            course_count,
            strict_capacity_balancing,
        }
    }

    pub fn needed_seats(&self) -> u32 {
        self.team_size.saturating_mul(self.course_count)
    }

    pub fn validate(&self) -> AssignResult<()> {
        if self.team_size == 0 {
            return Err(AssignError::InvalidConfig("team_size must be at least 1".into()));
        }
        if self.course_count == 0 {
            return Err(AssignError::InvalidConfig("course_count must be at least 1".into()));
        }
        Ok(())
    }
}

/// A team of participants, numbered from 1 in build order.
#[derive(Debug, Clone, Serialize)]
pub struct Team<P> {
    pub number: u32,
    pub members: Vec<P>,
}

impl<P: Assignable> Team<P> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_ids(&self) -> HashSet<P::Id> {
        self.members.iter().map(Assignable::id).collect()
    }

    pub fn contains(&self, id: &P::Id) -> bool {
        self.members.iter().any(|m| &m.id() == id)
    }
}

/// Outcome of [`build_teams`](crate::build_teams).
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResult<P> {
    pub teams: Vec<Team<P>>,
    /// Participants left over after forming full teams, in input order.
    pub not_assigned: Vec<P>,
}

impl<P: Assignable> AssignmentResult<P> {
    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }

    pub fn team_of(&self, id: &P::Id) -> Option<&Team<P>> {
        self.teams.iter().find(|t| t.contains(id))
    }
}

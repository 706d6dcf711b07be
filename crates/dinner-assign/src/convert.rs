//! Bridges `dinner_core` records and config to the assigner's types.

use dinner_core::{Participant, ParticipantId, RunningDinnerConfig, SeatCapacity};

use crate::model::{Assignable, AssignmentConfig};

impl Assignable for Participant {
    type Id = ParticipantId;

    fn id(&self) -> ParticipantId {
        self.number
    }

    fn seats(&self) -> SeatCapacity {
        self.seats
    }
}

impl From<&RunningDinnerConfig> for AssignmentConfig {
    fn from(config: &RunningDinnerConfig) -> Self {
        AssignmentConfig {
            team_size: config.team_size,
            course_count: config.course_count(),
            strict_capacity_balancing: config.strict_capacity_balancing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinner_core::{HostingCapability, MealClass, ParticipantName};

    use crate::classify::hosting_capability;

    #[test]
    fn config_conversion_counts_meals() {
        let config = RunningDinnerConfig::builder()
            .team_size(3)
            .meals(vec![MealClass::main_course(), MealClass::dessert()])
            .strict_capacity_balancing(false)
            .build()
            .unwrap();

        let assign = AssignmentConfig::from(&config);

        assert_eq!(assign, AssignmentConfig::new(3, 2, false));
        assert_eq!(assign.needed_seats(), config.needed_seats());
    }

    #[test]
    fn classification_agrees_with_config_can_host() {
        let config = RunningDinnerConfig::default();
        let assign = AssignmentConfig::from(&config);

        for seats in [SeatCapacity::Undefined, SeatCapacity::Seats(4), SeatCapacity::Seats(6)] {
            let p = Participant::new(1, ParticipantName::new("Max", "Mustermann"), seats);
            assert_eq!(
                hosting_capability(p.seats(), assign.needed_seats()),
                config.can_host(&p)
            );
        }
        let unknown = Participant::new(2, ParticipantName::default(), SeatCapacity::Undefined);
        assert_eq!(config.can_host(&unknown), HostingCapability::Unknown);
    }

    #[test]
    fn participant_identity_is_its_number() {
        let p = Participant::new(9, ParticipantName::new("Biene", "Maja"), SeatCapacity::Seats(1000));
        assert_eq!(p.id(), ParticipantId(9));
    }
}

//! Participant records shared across the running dinner crates.
//!
//! These mirror what the import layer hands over after reading a
//! participant list: a numbered participant with a name, optional
//! contact details, and the number of seats they can offer at home.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a participant within one dinner (its participant number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Seats a participant offers at their residence.
///
/// Serialized as an optional integer: `null` or a missing field means the
/// participant never declared a capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum SeatCapacity {
    #[default]
    Undefined,
    Seats(u32),
}

impl SeatCapacity {
    pub fn is_defined(&self) -> bool {
        matches!(self, SeatCapacity::Seats(_))
    }

    pub fn seats(&self) -> Option<u32> {
        match self {
            SeatCapacity::Seats(n) => Some(*n),
            SeatCapacity::Undefined => None,
        }
    }
}

impl From<Option<u32>> for SeatCapacity {
    fn from(value: Option<u32>) -> Self {
        value.map_or(SeatCapacity::Undefined, SeatCapacity::Seats)
    }
}

impl From<SeatCapacity> for Option<u32> {
    fn from(value: SeatCapacity) -> Self {
        value.seats()
    }
}

/// Whether a participant can host a course, given the configured team size
/// and number of courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostingCapability {
    Yes,
    No,
    /// The participant did not declare a seat capacity.
    Unknown,
}

/// Name of a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantName {
    /// First name plus any middle names.
    #[serde(default)]
    pub firstname_part: String,
    #[serde(default)]
    pub lastname: String,
}

impl ParticipantName {
    pub fn new(firstname_part: &str, lastname: &str) -> Self {
        Self {
            firstname_part: firstname_part.to_string(),
            lastname: lastname.to_string(),
        }
    }

    pub fn full_name_firstname_first(&self) -> String {
        match (self.firstname_part.is_empty(), self.lastname.is_empty()) {
            (false, false) => format!("{} {}", self.firstname_part, self.lastname),
            (false, true) => self.firstname_part.clone(),
            (true, _) => self.lastname.clone(),
        }
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name_firstname_first())
    }
}

/// A registered participant of a running dinner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub number: ParticipantId,
    #[serde(default)]
    pub name: ParticipantName,
    #[serde(default)]
    pub seats: SeatCapacity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl Participant {
    pub fn new(number: u32, name: ParticipantName, seats: SeatCapacity) -> Self {
        Self {
            number: ParticipantId(number),
            name,
            seats,
            email: None,
            mobile_number: None,
        }
    }
}

// Two records with the same participant number are the same participant.
impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Participant {}

impl std::hash::Hash for Participant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_parts_with_single_space() {
        assert_eq!(
            ParticipantName::new("Max", "Mustermann").full_name_firstname_first(),
            "Max Mustermann"
        );
        assert_eq!(ParticipantName::new("Max", "").full_name_firstname_first(), "Max");
        assert_eq!(ParticipantName::new("", "Maja").full_name_firstname_first(), "Maja");
        assert_eq!(ParticipantName::default().full_name_firstname_first(), "");
    }

    #[test]
    fn seat_capacity_parses_from_optional_integer() {
        let json = r#"[{"number": 1, "seats": 6}, {"number": 2, "seats": null}, {"number": 3}]"#;
        let parsed: Vec<Participant> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].seats, SeatCapacity::Seats(6));
        assert_eq!(parsed[1].seats, SeatCapacity::Undefined);
        assert_eq!(parsed[2].seats, SeatCapacity::Undefined);
    }

    #[test]
    fn seat_capacity_serializes_undefined_as_null() {
        let p = Participant::new(7, ParticipantName::new("Biene", "Maja"), SeatCapacity::Undefined);
        let value = serde_json::to_value(&p).unwrap();
        assert!(value["seats"].is_null());
        assert_eq!(value["number"], 7);
    }

    #[test]
    fn equality_is_by_participant_number() {
        let a = Participant::new(1, ParticipantName::new("A", "B"), SeatCapacity::Seats(4));
        let b = Participant::new(1, ParticipantName::new("C", "D"), SeatCapacity::Undefined);
        let c = Participant::new(2, ParticipantName::new("A", "B"), SeatCapacity::Seats(4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

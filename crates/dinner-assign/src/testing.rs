use dinner_core::SeatCapacity;

use crate::model::Assignable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: u32,
    pub seats: SeatCapacity,
}

impl Guest {
    pub fn with_seats(id: u32, seats: u32) -> Self {
        Self {
            id,
            seats: SeatCapacity::Seats(seats),
        }
    }

    pub fn unknown(id: u32) -> Self {
        Self {
            id,
            seats: SeatCapacity::Undefined,
        }
    }

    pub fn all_unknown(count: u32) -> Vec<Self> {
        (1..=count).map(Self::unknown).collect()
    }
}

impl Assignable for Guest {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn seats(&self) -> SeatCapacity {
        self.seats
    }
}

use std::fmt;
use std::num::NonZeroU32;

use altis_core::SeatingLayout;
use serde::{Deserialize, Serialize};

/// What a flight needs to know about the aircraft flying it.
pub trait AircraftSpec {
    /// Human readable model name, e.g. `Airbus A345`.
    fn model_name(&self) -> &str;

    /// The rows and seat letters of the cabin.
    fn seating_layout(&self) -> SeatingLayout;

    fn num_seats(&self) -> usize {
        self.seating_layout().seat_count()
    }
}

/// Aircraft types with a known cabin layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftModel {
    AirbusA345,
    Boeing777,
}

impl AircraftModel {
    pub const ALL: [AircraftModel; 2] = [AircraftModel::AirbusA345, AircraftModel::Boeing777];

    fn last_row(self) -> u32 {
        match self {
            AircraftModel::AirbusA345 | AircraftModel::Boeing777 => 22,
        }
    }

    fn seat_letters(self) -> &'static str {
        match self {
            AircraftModel::AirbusA345 => "ABCDEF",
            // First class is laid out like economy here.
            AircraftModel::Boeing777 => "ABCDEFGHIJK",
        }
    }
}

impl AircraftSpec for AircraftModel {
    fn model_name(&self) -> &str {
        match self {
            AircraftModel::AirbusA345 => "Airbus A345",
            AircraftModel::Boeing777 => "Boeing 777",
        }
    }

    fn seating_layout(&self) -> SeatingLayout {
        let rows = (1..=self.last_row()).filter_map(NonZeroU32::new);
        SeatingLayout::new(rows, self.seat_letters().chars())
    }
}

impl fmt::Display for AircraftModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

/// A registered airframe of a given model, e.g. `G-EUPT`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Aircraft {
    pub registration: String,
    pub model: AircraftModel,
}

impl Aircraft {
    pub fn new(registration: impl Into<String>, model: AircraftModel) -> Self {
        Self {
            registration: registration.into(),
            model,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }
}

impl AircraftSpec for Aircraft {
    fn model_name(&self) -> &str {
        self.model.model_name()
    }

    fn seating_layout(&self) -> SeatingLayout {
        self.model.seating_layout()
    }
}

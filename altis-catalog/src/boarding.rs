use serde::Serialize;

/// Everything printed on a boarding card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardingCard {
    pub passenger: String,
    pub seat: String,
    pub flight_number: String,
    pub aircraft_model: String,
}

/// Receives one call per occupied seat when a flight issues boarding cards.
///
/// Presentation is entirely up to the implementor. Plain closures taking
/// `(passenger, seat, flight_number, aircraft_model)` qualify.
pub trait BoardingCardEmitter {
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str);
}

impl<F> BoardingCardEmitter for F
where
    F: FnMut(&str, &str, &str, &str),
{
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        self(passenger, seat, flight_number, aircraft_model)
    }
}

use std::sync::Arc;

use altis_core::{CoreError, CoreResult, FlightNumber, SeatDesignator};

use crate::aircraft::{Aircraft, AircraftSpec};
use crate::boarding::{BoardingCard, BoardingCardEmitter};
use crate::inventory::SeatMap;

/// A single flight and its seat allocations.
///
/// The aircraft is shared and only read: its layout sizes the seat map when the
/// flight is created and decides which seat designators are valid.
#[derive(Debug)]
pub struct Flight<A: AircraftSpec + ?Sized = Aircraft> {
    number: FlightNumber,
    aircraft: Arc<A>,
    seating: SeatMap,
}

impl<A: AircraftSpec + ?Sized> Flight<A> {
    /// Validates `number` and builds an empty seat map for `aircraft`.
    pub fn new(number: &str, aircraft: Arc<A>) -> CoreResult<Self> {
        let number = FlightNumber::new(number)?;
        let seating = SeatMap::new(aircraft.seating_layout());
        Ok(Self {
            number,
            aircraft,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn flight_number(&self) -> &FlightNumber {
        &self.number
    }

    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn aircraft(&self) -> &A {
        &self.aircraft
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model_name()
    }

    pub fn seating(&self) -> &SeatMap {
        &self.seating
    }

    /// Allocates `seat` (e.g. `12C`) to `passenger`.
    pub fn allocate_seat(&mut self, seat: &str, passenger: impl Into<String>) -> CoreResult<()> {
        let designator = self.parse_seat(seat)?;
        self.seating
            .occupy(designator, passenger.into())
            .map_err(|err| with_seat_text(err, seat))
    }

    /// Moves the passenger in `from_seat` to the empty `to_seat`.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> CoreResult<()> {
        let from = self.parse_seat(from_seat)?;
        if !self.seating.is_occupied(from) {
            return Err(CoreError::NoPassengerToRelocate(from_seat.to_string()));
        }

        let to = self.parse_seat(to_seat)?;
        self.seating
            .transfer(from, to)
            .map_err(|err| with_seat_text(err, to_seat))
    }

    /// The passenger currently in `seat`, if any.
    pub fn passenger_at(&self, seat: &str) -> CoreResult<Option<&str>> {
        let designator = self.parse_seat(seat)?;
        Ok(self.seating.occupant(designator))
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating.available()
    }

    /// Passengers and their seats in cabin order. Recomputed from the current
    /// seat map every time it is called.
    pub fn passenger_seats(&self) -> impl Iterator<Item = (&str, SeatDesignator)> + '_ {
        self.seating
            .occupied()
            .map(|(seat, passenger)| (passenger, seat))
    }

    /// One card per occupied seat, ordered by passenger name and then seat.
    pub fn boarding_cards(&self) -> Vec<BoardingCard> {
        let mut seats: Vec<(&str, String)> = self
            .passenger_seats()
            .map(|(passenger, seat)| (passenger, seat.to_string()))
            .collect();
        seats.sort();

        seats
            .into_iter()
            .map(|(passenger, seat)| BoardingCard {
                passenger: passenger.to_string(),
                seat,
                flight_number: self.number().to_string(),
                aircraft_model: self.aircraft_model().to_string(),
            })
            .collect()
    }

    /// Calls `emitter` once per occupied seat, in [`Flight::boarding_cards`] order.
    pub fn make_boarding_cards<E: BoardingCardEmitter + ?Sized>(&self, emitter: &mut E) {
        for card in self.boarding_cards() {
            emitter.emit(
                &card.passenger,
                &card.seat,
                &card.flight_number,
                &card.aircraft_model,
            );
        }
    }

    fn parse_seat(&self, seat: &str) -> CoreResult<SeatDesignator> {
        self.seating.layout().parse_seat(seat)
    }
}

// Seat map errors name the canonical designator; report what the caller typed.
fn with_seat_text(err: CoreError, seat: &str) -> CoreError {
    match err {
        CoreError::SeatOccupied(_) => CoreError::SeatOccupied(seat.to_string()),
        other => other,
    }
}

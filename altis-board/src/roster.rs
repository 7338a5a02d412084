use std::sync::Arc;

use altis_catalog::{Aircraft, BoardingCardEmitter, Flight};
use anyhow::Context;

use crate::app_config::FlightManifest;

/// Builds the flight described by `manifest`, then applies its allocations and
/// relocations in order. The first rejected step aborts the whole flight.
pub fn build_flight(manifest: &FlightManifest) -> anyhow::Result<Flight> {
    let aircraft = Arc::new(Aircraft::new(&manifest.registration, manifest.aircraft));
    let mut flight = Flight::new(&manifest.number, aircraft)
        .with_context(|| format!("Failed to create flight {}", manifest.number))?;

    tracing::info!(
        flight = %flight.number(),
        aircraft = %flight.aircraft_model(),
        registration = %manifest.registration,
        seats = flight.num_available_seats(),
        "Flight opened"
    );

    for allocation in &manifest.allocations {
        flight
            .allocate_seat(&allocation.seat, allocation.passenger.as_str())
            .with_context(|| {
                format!(
                    "Failed to allocate seat {} to {} on {}",
                    allocation.seat,
                    allocation.passenger,
                    flight.number()
                )
            })?;
        tracing::debug!(
            flight = %flight.number(),
            seat = %allocation.seat,
            passenger = %allocation.passenger,
            "Seat allocated"
        );
    }

    for relocation in &manifest.relocations {
        flight
            .relocate_passenger(&relocation.from, &relocation.to)
            .with_context(|| {
                format!(
                    "Failed to relocate passenger from {} to {} on {}",
                    relocation.from,
                    relocation.to,
                    flight.number()
                )
            })?;
        tracing::debug!(
            flight = %flight.number(),
            from = %relocation.from,
            to = %relocation.to,
            "Passenger relocated"
        );
    }

    Ok(flight)
}

/// Issues boarding cards as structured log events.
#[derive(Debug, Default)]
pub struct LogCardEmitter {
    issued: usize,
}

impl LogCardEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl BoardingCardEmitter for LogCardEmitter {
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        self.issued += 1;
        tracing::info!(
            passenger,
            seat,
            flight = flight_number,
            aircraft = aircraft_model,
            "Boarding card issued"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::{sample_flights, Relocation, SeatAllocation};
    use altis_core::{CoreError, ErrorKind};

    fn manifest(allocations: &[(&str, &str)], relocations: &[(&str, &str)]) -> FlightManifest {
        FlightManifest {
            number: "BA1654".to_string(),
            aircraft: altis_catalog::AircraftModel::AirbusA345,
            registration: "G-EUPT".to_string(),
            allocations: allocations
                .iter()
                .map(|(seat, passenger)| SeatAllocation {
                    seat: seat.to_string(),
                    passenger: passenger.to_string(),
                })
                .collect(),
            relocations: relocations
                .iter()
                .map(|(from, to)| Relocation {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_sample_roster_builds() {
        let flights: Vec<Flight> = sample_flights()
            .iter()
            .map(|manifest| build_flight(manifest).unwrap())
            .collect();

        assert_eq!(flights[0].num_available_seats(), 22 * 6 - 5);
        assert_eq!(flights[1].num_available_seats(), 22 * 11 - 5);
        assert_eq!(flights[1].aircraft().registration(), "A-AIRX");

        let mut emitter = LogCardEmitter::new();
        for flight in &flights {
            flight.make_boarding_cards(&mut emitter);
        }
        assert_eq!(emitter.issued(), 10);
    }

    #[test]
    fn test_relocations_are_applied() {
        let flight = build_flight(&manifest(&[("1A", "Flir Digg")], &[("1A", "22F")])).unwrap();
        assert_eq!(flight.passenger_at("22F").unwrap(), Some("Flir Digg"));
        assert_eq!(flight.passenger_at("1A").unwrap(), None);
    }

    #[test]
    fn test_rejected_step_reports_core_error() {
        let err = build_flight(&manifest(&[("1A", "Flir Digg"), ("1A", "Zen Mod")], &[]))
            .unwrap_err();
        let core = err.downcast_ref::<CoreError>().unwrap();
        assert_eq!(core.kind(), ErrorKind::SeatOccupied);
        assert!(err.to_string().contains("Failed to allocate seat 1A to Zen Mod"));

        let mut bad_number = manifest(&[], &[]);
        bad_number.number = "ba1654".to_string();
        let err = build_flight(&bad_number).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>().map(CoreError::kind),
            Some(ErrorKind::InvalidAirlineCode)
        );
    }
}

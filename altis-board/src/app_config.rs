use altis_catalog::AircraftModel;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub flights: Vec<FlightManifest>,
}

/// One flight to build, the seats to allocate on it and any moves to make
/// afterwards.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlightManifest {
    pub number: String,
    pub aircraft: AircraftModel,
    pub registration: String,
    #[serde(default)]
    pub allocations: Vec<SeatAllocation>,
    #[serde(default)]
    pub relocations: Vec<Relocation>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeatAllocation {
    pub seat: String,
    pub passenger: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of ALTIS)
            .add_source(config::Environment::with_prefix("ALTIS").separator("__"))
            .build()?;

        s.try_deserialize().map(Self::with_sample_fallback)
    }

    /// Parses a TOML document with the same shape as `config/default.toml`.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map(Self::with_sample_fallback)
    }

    fn with_sample_fallback(mut self) -> Self {
        if self.flights.is_empty() {
            self.flights = sample_flights();
        }
        self
    }
}

/// The two demonstration flights used when nothing is configured.
pub fn sample_flights() -> Vec<FlightManifest> {
    fn seats(pairs: &[(&str, &str)]) -> Vec<SeatAllocation> {
        pairs
            .iter()
            .map(|(seat, passenger)| SeatAllocation {
                seat: seat.to_string(),
                passenger: passenger.to_string(),
            })
            .collect()
    }

    vec![
        FlightManifest {
            number: "BA1654".to_string(),
            aircraft: AircraftModel::AirbusA345,
            registration: "G-EUPT".to_string(),
            allocations: seats(&[
                ("12C", "Lionel Man"),
                ("10A", "Dude Perfect"),
                ("11D", "Pana Wana"),
                ("1A", "Flir Digg"),
                ("2B", "Zen Mod"),
            ]),
            relocations: Vec::new(),
        },
        FlightManifest {
            number: "CD2341".to_string(),
            aircraft: AircraftModel::Boeing777,
            registration: "A-AIRX".to_string(),
            allocations: seats(&[
                ("3D", "Larry Walden"),
                ("20E", "Yao Hamushi"),
                ("12A", "Micheal Mroto"),
                ("2C", "Claire Reecs"),
                ("4B", "Pragya Khan"),
            ]),
            relocations: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_sample_roster() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.flights, sample_flights());
        assert_eq!(config.flights.len(), 2);
        assert_eq!(config.flights[1].aircraft, AircraftModel::Boeing777);
    }

    #[test]
    fn test_flight_manifest_from_toml() {
        let config = Config::from_toml(
            r#"
            [[flights]]
            number = "LH400"
            aircraft = "BOEING777"
            registration = "D-ABYA"

            [[flights.allocations]]
            seat = "5K"
            passenger = "Ada Lovelace"

            [[flights.relocations]]
            from = "5K"
            to = "6A"
            "#,
        )
        .unwrap();

        assert_eq!(config.flights.len(), 1);
        let flight = &config.flights[0];
        assert_eq!(flight.number, "LH400");
        assert_eq!(flight.aircraft, AircraftModel::Boeing777);
        assert_eq!(flight.allocations[0].passenger, "Ada Lovelace");
        assert_eq!(
            flight.relocations,
            vec![Relocation {
                from: "5K".to_string(),
                to: "6A".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_aircraft_is_rejected() {
        let result = Config::from_toml(
            r#"
            [[flights]]
            number = "LH400"
            aircraft = "CONCORDE"
            registration = "G-BOAC"
            "#,
        );
        assert!(result.is_err());
    }
}

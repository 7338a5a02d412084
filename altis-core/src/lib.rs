pub mod flight_number;
pub mod seat;

pub use flight_number::FlightNumber;
pub use seat::{SeatDesignator, SeatingLayout};

/// Failures raised while validating flights and working with their seat maps.
///
/// Every variant carries the text the caller supplied so the message can point
/// at the exact input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("No airline code in '{0}'")]
    MissingAirlineCode(String),
    #[error("Invalid airline code '{0}'")]
    InvalidAirlineCode(String),
    #[error("Invalid route number '{0}'")]
    InvalidRouteNumber(String),
    #[error("Invalid seat letter '{letter}' in seat '{seat}'")]
    InvalidSeatLetter { seat: String, letter: String },
    #[error("Invalid seat row '{row}' in seat '{seat}'")]
    InvalidSeatRow { seat: String, row: String },
    #[error("Seat {0} already occupied")]
    SeatOccupied(String),
    #[error("No passenger to relocate in seat {0}")]
    NoPassengerToRelocate(String),
}

/// Payload-free discriminant of [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingAirlineCode,
    InvalidAirlineCode,
    InvalidRouteNumber,
    InvalidSeatLetter,
    InvalidSeatRow,
    SeatOccupied,
    NoPassengerToRelocate,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::MissingAirlineCode(_) => ErrorKind::MissingAirlineCode,
            CoreError::InvalidAirlineCode(_) => ErrorKind::InvalidAirlineCode,
            CoreError::InvalidRouteNumber(_) => ErrorKind::InvalidRouteNumber,
            CoreError::InvalidSeatLetter { .. } => ErrorKind::InvalidSeatLetter,
            CoreError::InvalidSeatRow { .. } => ErrorKind::InvalidSeatRow,
            CoreError::SeatOccupied(_) => ErrorKind::SeatOccupied,
            CoreError::NoPassengerToRelocate(_) => ErrorKind::NoPassengerToRelocate,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

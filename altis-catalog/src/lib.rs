pub mod aircraft;
pub mod inventory;
pub mod flight;
pub mod boarding;

pub use aircraft::{Aircraft, AircraftModel, AircraftSpec};
pub use inventory::SeatMap;
pub use flight::Flight;
pub use boarding::{BoardingCard, BoardingCardEmitter};

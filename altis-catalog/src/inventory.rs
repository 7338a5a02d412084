use std::collections::HashMap;

use altis_core::{CoreError, CoreResult, SeatDesignator, SeatingLayout};

/// Seat occupancy for one flight.
///
/// There is exactly one cell per seat of the layout the map was built from,
/// keyed directly by the seat designator. A cell is either empty or holds a
/// single passenger name.
#[derive(Debug, Clone)]
pub struct SeatMap {
    layout: SeatingLayout,
    cells: HashMap<SeatDesignator, Option<String>>,
    available: usize,
}

impl SeatMap {
    /// Builds an empty map with one cell for every seat of `layout`.
    pub fn new(layout: SeatingLayout) -> Self {
        let cells: HashMap<_, _> = layout.seats().map(|seat| (seat, None)).collect();
        let available = cells.len();
        Self {
            layout,
            cells,
            available,
        }
    }

    pub fn layout(&self) -> &SeatingLayout {
        &self.layout
    }

    pub fn available(&self) -> usize {
        self.available
    }

    /// The passenger in `seat`, or `None` if it is empty or not part of the map.
    pub fn occupant(&self, seat: SeatDesignator) -> Option<&str> {
        self.cells.get(&seat).and_then(|cell| cell.as_deref())
    }

    pub fn is_occupied(&self, seat: SeatDesignator) -> bool {
        self.occupant(seat).is_some()
    }

    /// Puts `passenger` into the empty cell `seat`.
    pub fn occupy(&mut self, seat: SeatDesignator, passenger: String) -> CoreResult<()> {
        let cell = self.cell_mut(seat)?;
        if cell.is_some() {
            return Err(CoreError::SeatOccupied(seat.to_string()));
        }

        *cell = Some(passenger);
        self.available -= 1;
        Ok(())
    }

    /// Moves the passenger in `from` into the empty cell `to`.
    ///
    /// Both checks happen before either cell is touched, so a failed move
    /// leaves the map unchanged.
    pub fn transfer(&mut self, from: SeatDesignator, to: SeatDesignator) -> CoreResult<()> {
        if self.cell(from)?.is_none() {
            return Err(CoreError::NoPassengerToRelocate(from.to_string()));
        }
        if self.cell(to)?.is_some() {
            return Err(CoreError::SeatOccupied(to.to_string()));
        }

        let passenger = self.cell_mut(from)?.take();
        *self.cell_mut(to)? = passenger;
        Ok(())
    }

    /// Occupied seats in layout order: rows first, then letters.
    pub fn occupied(&self) -> impl Iterator<Item = (SeatDesignator, &str)> + '_ {
        self.layout
            .seats()
            .filter_map(move |seat| self.occupant(seat).map(|passenger| (seat, passenger)))
    }

    fn cell(&self, seat: SeatDesignator) -> CoreResult<&Option<String>> {
        match self.cells.get(&seat) {
            Some(cell) => Ok(cell),
            None => Err(outside(&self.layout, seat)),
        }
    }

    fn cell_mut(&mut self, seat: SeatDesignator) -> CoreResult<&mut Option<String>> {
        match self.cells.get_mut(&seat) {
            Some(cell) => Ok(cell),
            None => Err(outside(&self.layout, seat)),
        }
    }
}

// Designators parsed against this layout always have a cell. Anything else is
// rejected the way the parser would have rejected it.
fn outside(layout: &SeatingLayout, seat: SeatDesignator) -> CoreError {
    if layout.has_letter(seat.letter()) {
        CoreError::InvalidSeatRow {
            seat: seat.to_string(),
            row: seat.row().to_string(),
        }
    } else {
        CoreError::InvalidSeatLetter {
            seat: seat.to_string(),
            letter: seat.letter().to_string(),
        }
    }
}

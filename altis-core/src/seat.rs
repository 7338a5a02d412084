use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;

use crate::{CoreError, CoreResult};

/// The seat grid of an aircraft: which row numbers exist and which seat
/// letters each row has.
///
/// Both sequences keep the order they were given in, with duplicates dropped.
/// Membership checks go through the hash sets kept next to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingLayout {
    rows: Vec<NonZeroU32>,
    letters: Vec<char>,
    row_set: HashSet<NonZeroU32>,
    letter_set: HashSet<char>,
}

impl SeatingLayout {
    pub fn new(
        rows: impl IntoIterator<Item = NonZeroU32>,
        letters: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut row_set = HashSet::new();
        let rows = rows.into_iter().filter(|row| row_set.insert(*row)).collect();
        let mut letter_set = HashSet::new();
        let letters = letters
            .into_iter()
            .filter(|letter| letter_set.insert(*letter))
            .collect();

        Self {
            rows,
            letters,
            row_set,
            letter_set,
        }
    }

    pub fn rows(&self) -> &[NonZeroU32] {
        &self.rows
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn seat_count(&self) -> usize {
        self.rows.len() * self.letters.len()
    }

    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_set.contains(&letter)
    }

    /// Every seat of the grid, row by row, in layout order.
    pub fn seats(&self) -> impl Iterator<Item = SeatDesignator> + '_ {
        self.rows.iter().flat_map(move |&row| {
            self.letters
                .iter()
                .map(move |&letter| SeatDesignator { row, letter })
        })
    }

    /// Parses a designator such as `12C` against this layout.
    ///
    /// The final character is the seat letter and everything before it is the
    /// row number. The letter is checked first.
    pub fn parse_seat(&self, seat: &str) -> CoreResult<SeatDesignator> {
        let Some(letter) = seat.chars().next_back() else {
            return Err(CoreError::InvalidSeatLetter {
                seat: seat.to_string(),
                letter: String::new(),
            });
        };
        if !self.has_letter(letter) {
            return Err(CoreError::InvalidSeatLetter {
                seat: seat.to_string(),
                letter: letter.to_string(),
            });
        }

        let row_text = &seat[..seat.len() - letter.len_utf8()];
        let invalid_row = || CoreError::InvalidSeatRow {
            seat: seat.to_string(),
            row: row_text.to_string(),
        };
        let row = row_text.parse::<NonZeroU32>().map_err(|_| invalid_row())?;
        if !self.row_set.contains(&row) {
            return Err(invalid_row());
        }

        Ok(SeatDesignator { row, letter })
    }
}

/// One physical seat, e.g. row 12 letter `C`.
///
/// Only [`SeatingLayout::parse_seat`] produces designators from text, so a
/// designator obtained that way always lies inside the layout that parsed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatDesignator {
    row: NonZeroU32,
    letter: char,
}

impl SeatDesignator {
    pub fn row(&self) -> NonZeroU32 {
        self.row
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for SeatDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn row(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn airbus() -> SeatingLayout {
        SeatingLayout::new((1..=22).map(row), "ABCDEF".chars())
    }

    #[test]
    fn test_layout_dimensions() {
        let layout = airbus();
        assert_eq!(layout.rows().len(), 22);
        assert_eq!(layout.letters(), &['A', 'B', 'C', 'D', 'E', 'F']);
        assert_eq!(layout.seat_count(), 132);
        assert_eq!(layout.seats().count(), 132);

        let dupes = SeatingLayout::new([row(3), row(1), row(3)], "AAB".chars());
        assert_eq!(dupes.rows(), &[row(3), row(1)]);
        assert_eq!(dupes.letters(), &['A', 'B']);
    }

    #[test]
    fn test_large_layout() {
        let layout = SeatingLayout::new((1..=100_000).map(row), "AB".chars());
        assert_eq!(layout.rows().len(), 100_000);
        assert_eq!(layout.seat_count(), 200_000);

        let repeated = SeatingLayout::new((1..=100_000).chain(1..=100_000).map(row), "AB".chars());
        assert_eq!(repeated, layout);

        assert_eq!(layout.parse_seat("100000B").unwrap().to_string(), "100000B");
        assert_eq!(layout.parse_seat("1A").unwrap().row().get(), 1);
        let err = layout.parse_seat("100001A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSeatRow);
    }

    #[test]
    fn test_parse_seat() {
        let layout = airbus();

        let seat = layout.parse_seat("12C").unwrap();
        assert_eq!(seat.row().get(), 12);
        assert_eq!(seat.letter(), 'C');
        assert_eq!(seat.to_string(), "12C");

        assert_eq!(layout.parse_seat("1A").unwrap().to_string(), "1A");
        assert_eq!(layout.parse_seat("22F").unwrap().to_string(), "22F");
    }

    #[test]
    fn test_parse_seat_bad_letter() {
        let layout = airbus();
        for seat in ["12G", "12c", "12", "", "7Z"] {
            let err = layout.parse_seat(seat).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSeatLetter, "{seat}");
        }
    }

    #[test]
    fn test_parse_seat_bad_row() {
        let layout = airbus();
        // Malformed row text.
        for seat in ["A", "XA", "AB", "1.5A", "-1A", "99999999999A"] {
            let err = layout.parse_seat(seat).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSeatRow, "{seat}");
        }
        // Well formed but outside the layout.
        for seat in ["0A", "23A", "100B"] {
            let err = layout.parse_seat(seat).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSeatRow, "{seat}");
        }

        let err = layout.parse_seat("23A").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidSeatRow {
                seat: "23A".to_string(),
                row: "23".to_string()
            }
        );
    }
}

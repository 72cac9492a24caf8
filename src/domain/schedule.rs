use std::fmt;
use std::str::FromStr;

use crate::reservation_actor::ReservationError;

/// Departure slots offered for the night run, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DepartureTime {
    H21,
    H22,
    H23,
    H00,
    H01,
    H02,
    H03,
    H04,
    H05,
    H06,
}

impl DepartureTime {
    pub const ALL: [DepartureTime; 10] = [
        DepartureTime::H21,
        DepartureTime::H22,
        DepartureTime::H23,
        DepartureTime::H00,
        DepartureTime::H01,
        DepartureTime::H02,
        DepartureTime::H03,
        DepartureTime::H04,
        DepartureTime::H05,
        DepartureTime::H06,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DepartureTime::H21 => "21:00",
            DepartureTime::H22 => "22:00",
            DepartureTime::H23 => "23:00",
            DepartureTime::H00 => "00:00",
            DepartureTime::H01 => "01:00",
            DepartureTime::H02 => "02:00",
            DepartureTime::H03 => "03:00",
            DepartureTime::H04 => "04:00",
            DepartureTime::H05 => "05:00",
            DepartureTime::H06 => "06:00",
        }
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepartureTime {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DepartureTime::ALL
            .into_iter()
            .find(|time| time.label() == s)
            .ok_or_else(|| ReservationError::ValidationError(format!("unknown departure time: {s:?}")))
    }
}

/// A seat on the bus, labelled `1` through `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat(u8);

impl Seat {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(number: u8) -> Result<Self, ReservationError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ReservationError::ValidationError(format!(
                "seat {number} is outside {}..={}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Every seat in grid order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (Self::MIN..=Self::MAX).map(Seat)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seat {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ReservationError::ValidationError(format!("unknown seat: {s:?}")))?;
        Seat::new(number)
    }
}

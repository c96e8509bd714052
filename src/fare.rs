//! Day-pass fare rules from the purchase screen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Adult day pass, KRW.
pub const PRICE_ADULT: u64 = 20_000;

/// Child day pass, KRW.
pub const PRICE_CHILD: u64 = 10_000;

/// A booking is capped at nine travellers total.
pub const MAX_PARTY_SIZE: u32 = 9;

/// The travellers on one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub adults: u32,
    pub children: u32,
}

impl Party {
    pub fn new(adults: u32, children: u32) -> Self {
        Party { adults, children }
    }

    pub fn size(&self) -> u32 {
        self.adults + self.children
    }

    /// Total fare in KRW.
    pub fn total_fare(&self) -> u64 {
        u64::from(self.adults) * PRICE_ADULT + u64::from(self.children) * PRICE_CHILD
    }

    /// Booking rules: at least one traveller, at most [`MAX_PARTY_SIZE`] total.
    pub fn validate(&self) -> Result<(), FareError> {
        if self.size() == 0 {
            return Err(FareError::EmptyParty);
        }
        if self.size() > MAX_PARTY_SIZE {
            return Err(FareError::PartyTooLarge(self.size()));
        }
        Ok(())
    }

    /// Display label in the app's style, e.g. `성인 2, 어린이 1`.
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.adults > 0 {
            parts.push(format!("성인 {}", self.adults));
        }
        if self.children > 0 {
            parts.push(format!("어린이 {}", self.children));
        }

        if parts.is_empty() {
            return String::from("인원 미선택");
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareError {
    EmptyParty,
    PartyTooLarge(u32),
}

impl fmt::Display for FareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FareError::EmptyParty => write!(f, "select at least one traveller"),
            FareError::PartyTooLarge(n) => {
                write!(f, "bookings are limited to {MAX_PARTY_SIZE} travellers (got {n})")
            }
        }
    }
}

impl std::error::Error for FareError {}

//! Pass ticket wallet.
//!
//! The app keeps at most one purchased day pass; buying again replaces it.
//! Stored in the same database as the stamps, as a single fixed-id row.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;
use serde::Serialize;

use super::{fallback, StampStore};
use crate::fare::Party;

/// The purchased day pass as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassTicket {
    pub travel_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub purchased_at: DateTime<Utc>,
}

impl PassTicket {
    pub fn new(travel_date: NaiveDate, party: Party) -> Self {
        PassTicket {
            travel_date,
            adults: party.adults,
            children: party.children,
            purchased_at: Utc::now(),
        }
    }

    pub fn party(&self) -> Party {
        Party {
            adults: self.adults,
            children: self.children,
        }
    }

    /// Payload encoded into the check-in QR image:
    /// `DTRIP-{purchase millis}-{adults}-{children}`.
    pub fn checkin_code(&self) -> String {
        format!(
            "DTRIP-{}-{}-{}",
            self.purchased_at.timestamp_millis(),
            self.adults,
            self.children
        )
    }
}

impl StampStore {
    /// Store the purchased pass, replacing any previous booking.
    pub fn save_ticket(&mut self, ticket: &PassTicket) {
        let result = self.conn.execute(
            "INSERT OR REPLACE INTO pass_ticket (id, travel_date, adults, children, purchased_at)
             VALUES (1, ?1, ?2, ?3, ?4)",
            params![
                ticket.travel_date.to_string(),
                ticket.adults,
                ticket.children,
                ticket.purchased_at.to_rfc3339(),
            ],
        );

        fallback("ticket save", result.map(|_| ()), ());
    }

    /// The current booking, if one exists. A row that no longer parses is
    /// treated as no booking at all.
    pub fn load_ticket(&self) -> Option<PassTicket> {
        let result = self.conn.query_row(
            "SELECT travel_date, adults, children, purchased_at FROM pass_ticket WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        );

        let (date_raw, adults, children, purchased_raw) = match result {
            Ok(columns) => columns,
            Err(rusqlite::Error::QueryReturnedNoRows) => return None,
            Err(e) => {
                eprintln!("warning: stamp store ticket load failed: {e}");
                return None;
            }
        };

        let travel_date = date_raw.parse().ok()?;
        let purchased_at = DateTime::parse_from_rfc3339(&purchased_raw)
            .ok()?
            .with_timezone(&Utc);

        Some(PassTicket {
            travel_date,
            adults,
            children,
            purchased_at,
        })
    }

    /// Cancel the booking. Tolerant of there being none.
    pub fn clear_ticket(&mut self) {
        let result = self.conn.execute("DELETE FROM pass_ticket", []);
        fallback("ticket clear", result.map(|_| ()), ());
    }
}

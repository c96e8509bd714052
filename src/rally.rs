//! Proximity gate and progress aggregation for the stamp rally.
//!
//! Classifies each place's collectability from the user's current location
//! and the persisted collection state. The classification is advisory:
//! callers decide what to offer based on the status, but the collect path
//! records a stamp regardless of distance.

use serde::Serialize;

use crate::catalog::{self, Place, COLLECT_RADIUS_M};
use crate::geo::{distance_km, GeoPoint};
use crate::store::{Progress, StampStore};

/// Collectability of a single place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CollectionStatus {
    /// Already collected. Permanent until an explicit remove.
    Collected,
    /// Close enough to collect.
    InRange,
    /// Too far. Carries the measured distance for display.
    OutOfRange { distance_km: f64 },
    /// No location fix available.
    Unknown,
}

pub struct Rally {
    store: StampStore,
    radius_km: f64,
}

impl Rally {
    pub fn new(store: StampStore) -> Self {
        Self::with_radius_m(store, COLLECT_RADIUS_M)
    }

    pub fn with_radius_m(store: StampStore, radius_m: u32) -> Self {
        Rally {
            store,
            radius_km: f64::from(radius_m) / 1000.0,
        }
    }

    /// Classify one place against the user's current location.
    ///
    /// Collected wins over distance: once a stamp is recorded it stays
    /// Collected wherever the user happens to be. The radius boundary is
    /// inclusive.
    pub fn status(&self, place: &Place, user: Option<GeoPoint>) -> CollectionStatus {
        if self.store.is_collected(place.id) {
            return CollectionStatus::Collected;
        }

        match user {
            Some(at) => {
                let distance = distance_km(at, place.location);
                if distance <= self.radius_km {
                    CollectionStatus::InRange
                } else {
                    CollectionStatus::OutOfRange {
                        distance_km: distance,
                    }
                }
            }
            None => CollectionStatus::Unknown,
        }
    }

    /// Record a stamp. Returns false when the id is not in the catalog or
    /// the stamp was already collected. Distance is not checked here.
    pub fn collect(&mut self, stamp_id: u32) -> bool {
        if catalog::find(stamp_id).is_none() {
            return false;
        }
        self.store.collect(stamp_id)
    }

    /// Undo a collection. Returns false only when the id is not in the
    /// catalog; removing an uncollected stamp still succeeds.
    pub fn remove(&mut self, stamp_id: u32) -> bool {
        if catalog::find(stamp_id).is_none() {
            return false;
        }
        self.store.remove(stamp_id)
    }

    /// Progress over the whole catalog.
    pub fn progress(&self) -> Progress {
        self.store.progress(catalog::count())
    }

    pub fn store(&self) -> &StampStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StampStore {
        &mut self.store
    }
}

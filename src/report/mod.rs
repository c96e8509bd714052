pub mod json;
pub mod table;

use serde::Serialize;

use crate::catalog;
use crate::config::Config;
use crate::geo::GeoPoint;
use crate::rally::{CollectionStatus, Rally};
use crate::store::Progress;

/// One row of the status report.
#[derive(Serialize)]
pub struct PlaceStatus {
    pub id: u32,
    pub name: &'static str,
    pub era: &'static str,
    pub address: &'static str,
    pub status: CollectionStatus,
}

/// Everything the status screen shows: per-place rows plus the progress bar.
#[derive(Serialize)]
pub struct StatusReport {
    pub places: Vec<PlaceStatus>,
    pub progress: Progress,
}

pub fn build(rally: &Rally, user: Option<GeoPoint>) -> StatusReport {
    let places = catalog::places()
        .iter()
        .map(|place| PlaceStatus {
            id: place.id,
            name: place.name,
            era: place.era.label(),
            address: place.address,
            status: rally.status(place, user),
        })
        .collect();

    StatusReport {
        places,
        progress: rally.progress(),
    }
}

pub fn print(report: &StatusReport, config: &Config) {
    if config.json_output {
        println!("{}", json::render(report));
    } else {
        print!("{}", table::render(report));
    }
}

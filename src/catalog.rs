//! Static catalog of the Daejeon historical places in the stamp rally.
//!
//! Loaded once, never mutated. Ids are stable: they key the persisted
//! collection records, so reordering or renumbering entries would orphan
//! already-collected stamps.

use serde::Serialize;

use crate::geo::GeoPoint;

/// Collection radius around each place, in meters.
pub const COLLECT_RADIUS_M: u32 = 100;

/// Fallback map center when no location fix is available (Daejeon city center).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 36.3504,
    lng: 127.3845,
};

/// Historical era a place belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Era {
    Baekje,
    Joseon,
    Modern,
    Contemporary,
}

impl Era {
    /// Display label as shown in the app.
    pub fn label(&self) -> &'static str {
        match self {
            Era::Baekje => "백제시대",
            Era::Joseon => "조선시대",
            Era::Modern => "근대",
            Era::Contemporary => "근현대",
        }
    }
}

/// One stamp-rally place. Immutable catalog data.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub location: GeoPoint,
    pub era: Era,
    pub address: &'static str,
}

pub const PLACES: &[Place] = &[
    Place {
        id: 1,
        name: "대전역 구 역사",
        description: "1958년에 건립된 근대 건축물로, 대전의 교통 역사를 상징하는 중요한 문화재입니다.",
        location: GeoPoint {
            lat: 36.3324,
            lng: 127.4346,
        },
        era: Era::Modern,
        address: "대전광역시 동구 정동",
    },
    Place {
        id: 2,
        name: "한밭교육박물관",
        description: "대전 교육의 역사와 변천사를 한눈에 볼 수 있는 교육 전문 박물관입니다.",
        location: GeoPoint {
            lat: 36.3547,
            lng: 127.3856,
        },
        era: Era::Contemporary,
        address: "대전광역시 동구 용전동",
    },
    Place {
        id: 3,
        name: "우암사적공원",
        description: "조선 후기 대학자 송시열 선생의 유적지로, 남간정사와 기국정 등이 있습니다.",
        location: GeoPoint {
            lat: 36.3072,
            lng: 127.4156,
        },
        era: Era::Joseon,
        address: "대전광역시 동구 가양동",
    },
    Place {
        id: 4,
        name: "계족산성",
        description: "백제시대에 축조된 산성으로, 둘레 약 1km의 성벽이 남아있습니다.",
        location: GeoPoint {
            lat: 36.4156,
            lng: 127.4089,
        },
        era: Era::Baekje,
        address: "대전광역시 대덕구 장동",
    },
    Place {
        id: 5,
        name: "대전 근현대사 전시관",
        description: "대전의 근현대 역사를 다양한 자료와 전시물로 만나볼 수 있는 전시관입니다.",
        location: GeoPoint {
            lat: 36.3504,
            lng: 127.3849,
        },
        era: Era::Contemporary,
        address: "대전광역시 중구 대흥동",
    },
];

pub fn places() -> &'static [Place] {
    PLACES
}

pub fn find(id: u32) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id == id)
}

pub fn count() -> usize {
    PLACES.len()
}

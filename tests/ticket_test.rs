use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use dtrip::fare::{FareError, Party, MAX_PARTY_SIZE, PRICE_ADULT, PRICE_CHILD};
use dtrip::store::ticket::PassTicket;
use dtrip::store::StampStore;

fn travel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
}

fn temp_store(dir: &TempDir) -> StampStore {
    StampStore::open(Some(&dir.path().join("dtrip.db"))).expect("open store")
}

#[test]
fn fare_adds_up_per_traveller() {
    let party = Party::new(2, 1);
    assert_eq!(party.total_fare(), 2 * PRICE_ADULT + PRICE_CHILD);
    assert_eq!(party.total_fare(), 50_000);
}

#[test]
fn empty_party_is_rejected() {
    assert_eq!(Party::new(0, 0).validate(), Err(FareError::EmptyParty));
}

#[test]
fn party_over_the_cap_is_rejected() {
    assert_eq!(
        Party::new(5, 5).validate(),
        Err(FareError::PartyTooLarge(10))
    );
}

#[test]
fn party_at_the_cap_is_allowed() {
    let party = Party::new(MAX_PARTY_SIZE - 2, 2);
    assert_eq!(party.size(), MAX_PARTY_SIZE);
    assert!(party.validate().is_ok());
}

#[test]
fn party_label_matches_the_app_copy() {
    assert_eq!(Party::new(2, 1).label(), "성인 2, 어린이 1");
    assert_eq!(Party::new(2, 0).label(), "성인 2");
    assert_eq!(Party::new(0, 3).label(), "어린이 3");
    assert_eq!(Party::new(0, 0).label(), "인원 미선택");
}

#[test]
fn wallet_is_empty_before_any_purchase() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    assert!(store.load_ticket().is_none());
}

#[test]
fn buying_again_replaces_the_booking() {
    let dir = TempDir::new().unwrap();
    let mut store = temp_store(&dir);

    store.save_ticket(&PassTicket::new(travel_date(), Party::new(1, 0)));
    store.save_ticket(&PassTicket::new(travel_date(), Party::new(2, 2)));

    let ticket = store.load_ticket().expect("booking present");
    assert_eq!(ticket.adults, 2);
    assert_eq!(ticket.children, 2);
}

#[test]
fn booking_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = temp_store(&dir);
        store.save_ticket(&PassTicket::new(travel_date(), Party::new(2, 1)));
    }

    let reopened = temp_store(&dir);
    let ticket = reopened.load_ticket().expect("booking present");
    assert_eq!(ticket.travel_date, travel_date());
    assert_eq!(ticket.party(), Party::new(2, 1));
}

#[test]
fn clear_cancels_the_booking() {
    let dir = TempDir::new().unwrap();
    let mut store = temp_store(&dir);

    store.save_ticket(&PassTicket::new(travel_date(), Party::new(1, 1)));
    store.clear_ticket();

    assert!(store.load_ticket().is_none());
}

#[test]
fn checkin_code_encodes_purchase_and_party() {
    let purchased_at = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
    let ticket = PassTicket {
        travel_date: travel_date(),
        adults: 2,
        children: 1,
        purchased_at,
    };

    assert_eq!(
        ticket.checkin_code(),
        format!("DTRIP-{}-2-1", purchased_at.timestamp_millis())
    );
}

#[test]
fn tickets_and_stamps_share_a_database() {
    let dir = TempDir::new().unwrap();
    let mut store = temp_store(&dir);

    store.collect(1);
    store.save_ticket(&PassTicket::new(travel_date(), Party::new(1, 0)));

    assert!(store.is_collected(1));
    assert!(store.load_ticket().is_some());

    // resetting stamps never touches the booking
    store.reset_all();
    assert!(store.load_ticket().is_some());
}

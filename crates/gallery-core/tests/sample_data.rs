//! Shape and field-level invariants of the sample collections.

use std::collections::HashSet;

use gallery_core::data::{
    BOOKINGS, CONTACT_EMAIL_DOMAIN, CONTACTS, FILES, FORECASTS, RoomType, TRACKS,
    celsius_to_fahrenheit, fresh_bookings, fresh_contacts,
};

#[test]
fn collection_sizes() {
    assert_eq!(BOOKINGS.len(), 3);
    assert_eq!(FORECASTS.len(), 5);
    assert_eq!(TRACKS.len(), 4);
    assert_eq!(CONTACTS.len(), 28);
    assert_eq!(FILES.len(), 4);
}

#[test]
fn booking_coupons() {
    let coupons: Vec<_> = BOOKINGS
        .iter()
        .map(|b| (b.coupon_id.as_deref(), b.discount.as_ref().map(|d| d.discount)))
        .collect();
    assert_eq!(
        coupons,
        [
            (Some("BOOK10"), Some(10)),
            (Some("BOOK25"), Some(25)),
            (Some("BOOK50"), Some(50)),
        ]
    );
}

#[test]
fn booking_dates_ordered() {
    for b in BOOKINGS.iter() {
        let end = b.booking_end_date.expect("sample bookings have an end date");
        assert!(end > b.booking_start_date, "booking {} ends before it starts", b.id);
    }
}

#[test]
fn booking_room_types_known() {
    for b in BOOKINGS.iter() {
        assert!(RoomType::ALL.contains(&b.room_type));
    }
}

#[test]
fn forecast_fahrenheit_matches_celsius() {
    for f in FORECASTS.iter() {
        assert_eq!(f.temperature_f, celsius_to_fahrenheit(f.temperature_c));
    }
    let dates: HashSet<_> = FORECASTS.iter().map(|f| f.date).collect();
    assert_eq!(dates.len(), FORECASTS.len());
}

#[test]
fn tracks_have_unique_ids_and_sane_years() {
    let ids: HashSet<_> = TRACKS.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), TRACKS.len());
    for t in TRACKS.iter() {
        assert!(t.year > 1900 && t.year < 2100);
    }
}

#[test]
fn contacts_fields() {
    for c in CONTACTS.iter() {
        assert!(c.email.contains('@'));
        assert!(c.email.ends_with(CONTACT_EMAIL_DOMAIN));
        assert!(c.display_name.contains(&c.first_name));
        assert!(c.display_name.contains(&c.last_name));
        for skill in ["servicestack", "react", "c#"] {
            assert!(c.skills.contains(&skill));
        }
    }
}

#[test]
fn files_fields() {
    for f in FILES.iter() {
        assert!(f.content_type.starts_with("image/"));
        assert!((400_000..=800_000).contains(&f.content_length));
        assert!(!f.file_name.is_empty());
        assert!(f.file_path.contains(&f.file_name));
    }
}

#[test]
fn fresh_copies_do_not_share_state() {
    let mut a = fresh_bookings();
    a.clear();
    assert_eq!(fresh_bookings().len(), 3);

    let mut contacts = fresh_contacts();
    contacts[0].skills.push("rust");
    assert_eq!(CONTACTS[0].skills.len(), 3);
}

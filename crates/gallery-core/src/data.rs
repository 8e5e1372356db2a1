//! Sample records used to populate the demo pages.
//!
//! Each collection exists twice: a shared, lazily built snapshot
//! (`BOOKINGS`, `FORECASTS`, ...) for read-only views, and a `fresh_*`
//! constructor that builds new values on every call for pages that mutate
//! their own copy.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use serde::Serialize;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ============================================================================
// Bookings
// ============================================================================

/// Hotel room categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RoomType {
    Single,
    Double,
    Queen,
    Twin,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 5] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Queen,
        RoomType::Twin,
        RoomType::Suite,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Queen => "Queen",
            Self::Twin => "Twin",
            Self::Suite => "Suite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discount coupon attached to a booking.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub description: String,
    /// Percentage off.
    pub discount: u8,
    pub expiry_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    pub name: String,
    pub room_type: RoomType,
    pub room_number: u32,
    pub cost: f64,
    pub booking_start_date: NaiveDate,
    pub booking_end_date: Option<NaiveDate>,
    pub created_by: String,
    pub coupon_id: Option<String>,
    pub discount: Option<Coupon>,
}

impl Booking {
    /// Length of stay in nights, when an end date is known.
    pub fn nights(&self) -> Option<i64> {
        self.booking_end_date
            .map(|end| (end - self.booking_start_date).num_days())
    }
}

fn coupon(id: &str, discount: u8) -> Coupon {
    Coupon {
        id: id.to_string(),
        description: format!("{discount}% off"),
        discount,
        expiry_date: ymd(2030, 1, 1),
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u32,
    name: &str,
    room_type: RoomType,
    room_number: u32,
    cost: f64,
    start: NaiveDate,
    nights: u64,
    coupon_id: &str,
    discount: u8,
) -> Booking {
    Booking {
        id,
        name: name.to_string(),
        room_type,
        room_number,
        cost,
        booking_start_date: start,
        booking_end_date: start.checked_add_days(Days::new(nights)),
        created_by: "employee@email.com".to_string(),
        coupon_id: Some(coupon_id.to_string()),
        discount: Some(coupon(coupon_id, discount)),
    }
}

/// Three bookings, each with a coupon applied.
pub fn fresh_bookings() -> Vec<Booking> {
    vec![
        booking(1, "First Booking!", RoomType::Queen, 10, 100.0, ymd(2024, 10, 1), 7, "BOOK10", 10),
        booking(2, "Booking 2", RoomType::Double, 12, 120.0, ymd(2024, 10, 8), 5, "BOOK25", 25),
        booking(3, "Booking the 3rd", RoomType::Suite, 13, 130.0, ymd(2024, 10, 15), 3, "BOOK50", 50),
    ]
}

pub static BOOKINGS: LazyLock<Vec<Booking>> = LazyLock::new(fresh_bookings);

/// Fresh copy of a single booking by id.
pub fn fresh_booking(id: u32) -> Option<Booking> {
    fresh_bookings().into_iter().find(|b| b.id == id)
}

// ============================================================================
// Weather forecasts
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: &'static str,
}

/// Celsius to Fahrenheit, rounded the way the demo API does it.
pub fn celsius_to_fahrenheit(c: i32) -> i32 {
    32 + (f64::from(c) / 0.5556).round() as i32
}

const FORECAST_SAMPLES: [(i32, &str); 5] = [
    (-7, "Freezing"),
    (4, "Bracing"),
    (13, "Cool"),
    (22, "Mild"),
    (34, "Scorching"),
];

/// Five consecutive daily forecasts.
pub fn fresh_forecasts() -> Vec<Forecast> {
    let start = ymd(2024, 6, 1);
    FORECAST_SAMPLES
        .iter()
        .zip(0u64..)
        .map(|(&(c, summary), offset)| Forecast {
            date: start.checked_add_days(Days::new(offset)).unwrap_or(start),
            temperature_c: c,
            temperature_f: celsius_to_fahrenheit(c),
            summary,
        })
        .collect()
}

pub static FORECASTS: LazyLock<Vec<Forecast>> = LazyLock::new(fresh_forecasts);

// ============================================================================
// Tracks
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Track {
    pub id: u32,
    pub name: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub year: u16,
}

pub fn fresh_tracks() -> Vec<Track> {
    vec![
        Track { id: 1, name: "Everything's Not Lost", artist: "Coldplay", album: "Parachutes", year: 2000 },
        Track { id: 2, name: "Lose Yourself", artist: "Eminem", album: "Curtain Call", year: 2005 },
        Track { id: 3, name: "Just the Way You Are", artist: "Bruno Mars", album: "Doo-Wops & Hooligans", year: 2010 },
        Track { id: 4, name: "Bad Guy", artist: "Billie Eilish", album: "When We All Fall Asleep", year: 2019 },
    ]
}

pub static TRACKS: LazyLock<Vec<Track>> = LazyLock::new(fresh_tracks);

// ============================================================================
// Contacts
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_url: String,
    pub skills: Vec<&'static str>,
}

/// Domain every sample e-mail address uses.
pub const CONTACT_EMAIL_DOMAIN: &str = "email.com";

const CONTACT_SKILLS: [&str; 3] = ["servicestack", "react", "c#"];

const CONTACT_NAMES: [&str; 28] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol Williams",
    "David Brown",
    "Emma Jones",
    "Frank Garcia",
    "Grace Miller",
    "Henry Davis",
    "Isabel Rodriguez",
    "Jack Martinez",
    "Karen Hernandez",
    "Liam Lopez",
    "Mia Gonzalez",
    "Noah Wilson",
    "Olivia Anderson",
    "Paul Thomas",
    "Quinn Taylor",
    "Rachel Moore",
    "Samuel Jackson",
    "Tina Martin",
    "Umar Lee",
    "Vera Perez",
    "Walter Thompson",
    "Xena White",
    "Yusuf Harris",
    "Zoe Sanchez",
    "Aaron Clark",
    "Bella Ramirez",
];

fn contact(index: usize, display_name: &str) -> Contact {
    let (first, last) = display_name.split_once(' ').unwrap_or((display_name, ""));
    Contact {
        display_name: display_name.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            CONTACT_EMAIL_DOMAIN
        ),
        profile_url: format!("/img/profiles/user{}.svg", index % 12 + 1),
        skills: CONTACT_SKILLS.to_vec(),
    }
}

pub fn fresh_contacts() -> Vec<Contact> {
    CONTACT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| contact(i, name))
        .collect()
}

pub static CONTACTS: LazyLock<Vec<Contact>> = LazyLock::new(fresh_contacts);

// ============================================================================
// Files
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub file_path: String,
    pub file_name: String,
    pub content_type: &'static str,
    pub content_length: u64,
}

fn file(path: &str, content_type: &'static str, content_length: u64) -> FileMeta {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    FileMeta {
        file_path: path.to_string(),
        file_name: file_name.to_string(),
        content_type,
        content_length,
    }
}

pub fn fresh_files() -> Vec<FileMeta> {
    vec![
        file("/uploads/players/profile/1/avatar.jpg", "image/jpeg", 412_733),
        file("/uploads/players/profile/2/beach.png", "image/png", 538_211),
        file("/uploads/players/profile/3/mountains.webp", "image/webp", 644_902),
        file("/uploads/players/profile/4/sunset.jpg", "image/jpeg", 791_560),
    ]
}

pub static FILES: LazyLock<Vec<FileMeta>> = LazyLock::new(fresh_files);

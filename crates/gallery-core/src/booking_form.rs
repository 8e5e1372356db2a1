//! Typed booking form.
//!
//! Inputs are bound to [`BookingFormInput`], which holds raw text exactly as
//! typed. [`BookingFormInput::validate`] turns it into an [`UpdateBooking`]
//! or reports every invalid field at once.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{Booking, RoomType};
use crate::error::FieldError;

/// ISO calendar date format used by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    RoomType,
    RoomNumber,
    Cost,
    BookingStartDate,
    BookingEndDate,
    Notes,
}

impl BookingField {
    pub const ALL: [BookingField; 7] = [
        BookingField::Name,
        BookingField::RoomType,
        BookingField::RoomNumber,
        BookingField::Cost,
        BookingField::BookingStartDate,
        BookingField::BookingEndDate,
        BookingField::Notes,
    ];

    /// Field id as used in metadata and element ids.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RoomType => "roomType",
            Self::RoomNumber => "roomNumber",
            Self::Cost => "cost",
            Self::BookingStartDate => "bookingStartDate",
            Self::BookingEndDate => "bookingEndDate",
            Self::Notes => "notes",
        }
    }
}

/// A validated update request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub id: u32,
    pub name: String,
    pub room_type: RoomType,
    pub room_number: u32,
    pub cost: f64,
    pub booking_start_date: NaiveDate,
    pub booking_end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Every field that failed validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// The error for a given field id, if any.
    pub fn field(&self, id: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == id)
    }

    /// Errors whose field is not in `except` (those shown inline).
    pub fn summary<'a>(&'a self, except: &'a [&str]) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| !except.contains(&e.field()))
    }

    fn push(&mut self, err: FieldError) {
        self.0.push(err);
    }
}

/// Raw form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingFormInput {
    pub id: u32,
    pub name: String,
    pub room_type: String,
    pub room_number: String,
    pub cost: String,
    pub booking_start_date: String,
    pub booking_end_date: String,
    pub notes: String,
}

impl BookingFormInput {
    /// Empty form for the given booking id.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Pre-fill from an existing booking.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            name: booking.name.clone(),
            room_type: booking.room_type.as_str().to_string(),
            room_number: booking.room_number.to_string(),
            cost: booking.cost.to_string(),
            booking_start_date: booking.booking_start_date.format(DATE_FORMAT).to_string(),
            booking_end_date: booking
                .booking_end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            notes: String::new(),
        }
    }

    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::RoomType => &self.room_type,
            BookingField::RoomNumber => &self.room_number,
            BookingField::Cost => &self.cost,
            BookingField::BookingStartDate => &self.booking_start_date,
            BookingField::BookingEndDate => &self.booking_end_date,
            BookingField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::RoomType => &mut self.room_type,
            BookingField::RoomNumber => &mut self.room_number,
            BookingField::Cost => &mut self.cost,
            BookingField::BookingStartDate => &mut self.booking_start_date,
            BookingField::BookingEndDate => &mut self.booking_end_date,
            BookingField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// Validate every field and build the request.
    pub fn validate(&self) -> Result<UpdateBooking, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::Required(BookingField::Name.id()));
        }

        let room_type = match self.room_type.trim() {
            "" => {
                errors.push(FieldError::Required(BookingField::RoomType.id()));
                None
            }
            raw => RoomType::parse(raw).or_else(|| {
                errors.push(FieldError::NotAnOption {
                    field: BookingField::RoomType.id(),
                    allowed: RoomType::ALL.map(RoomType::as_str).join(", "),
                });
                None
            }),
        };

        let room_number = parse_count(&self.room_number, BookingField::RoomNumber.id())
            .map_err(|e| errors.push(e))
            .ok();
        let cost = parse_amount(&self.cost, BookingField::Cost.id())
            .map_err(|e| errors.push(e))
            .ok();

        let start = match parse_date(&self.booking_start_date, BookingField::BookingStartDate.id()) {
            Ok(Some(d)) => Some(d),
            Ok(None) => {
                errors.push(FieldError::Required(BookingField::BookingStartDate.id()));
                None
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let end_id = BookingField::BookingEndDate.id();
        let end = match parse_date(&self.booking_end_date, end_id) {
            Ok(end) => end,
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let (Some(s), Some(e)) = (start, end)
            && e < s
        {
            errors.push(FieldError::EndBeforeStart(end_id));
        }

        match (room_type, room_number, cost, start) {
            (Some(room_type), Some(room_number), Some(cost), Some(start)) if errors.is_empty() => {
                let notes = self.notes.trim();
                Ok(UpdateBooking {
                    id: self.id,
                    name: name.to_string(),
                    room_type,
                    room_number,
                    cost,
                    booking_start_date: start,
                    booking_end_date: end,
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_count(raw: &str, field: &'static str) -> Result<u32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required(field));
    }
    let n: i64 = raw.parse().map_err(|_| FieldError::NotANumber(field))?;
    if n < 0 {
        return Err(FieldError::Negative(field));
    }
    u32::try_from(n).map_err(|_| FieldError::NotANumber(field))
}

fn parse_amount(raw: &str, field: &'static str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required(field));
    }
    let n: f64 = raw.parse().map_err(|_| FieldError::NotANumber(field))?;
    if !n.is_finite() {
        return Err(FieldError::NotANumber(field));
    }
    if n < 0.0 {
        return Err(FieldError::Negative(field));
    }
    Ok(n)
}

/// Empty input is `Ok(None)`.
fn parse_date(raw: &str, field: &'static str) -> Result<Option<NaiveDate>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldError::InvalidDate(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fresh_booking;

    fn filled() -> BookingFormInput {
        BookingFormInput::from_booking(&fresh_booking(1).unwrap())
    }

    #[test]
    fn test_from_booking_dates() {
        let form = filled();
        assert_eq!(form.booking_start_date, "2024-10-01");
        assert_eq!(form.booking_end_date, "2024-10-08");
        assert_eq!(form.room_type, "Queen");
        assert_eq!(form.cost, "100");
    }

    #[test]
    fn test_valid_request() {
        let req = filled().validate().unwrap();
        assert_eq!(req.id, 1);
        assert_eq!(req.room_type, RoomType::Queen);
        assert_eq!(req.room_number, 10);
        assert_eq!(req.notes, None);
        assert_eq!(req.booking_end_date, NaiveDate::from_ymd_opt(2024, 10, 8));
    }

    #[test]
    fn test_empty_form_reports_required() {
        let errors = BookingFormInput::new(7).validate().unwrap_err();
        assert_eq!(errors.field("name"), Some(&FieldError::Required("name")));
        assert_eq!(errors.field("roomType"), Some(&FieldError::Required("roomType")));
        assert_eq!(errors.field("roomNumber"), Some(&FieldError::Required("roomNumber")));
        assert_eq!(errors.field("cost"), Some(&FieldError::Required("cost")));
        assert_eq!(
            errors.field("bookingStartDate"),
            Some(&FieldError::Required("bookingStartDate"))
        );
        assert!(errors.field("bookingEndDate").is_none());
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_bad_values() {
        let mut form = filled();
        form.set(BookingField::RoomType, "Penthouse".into());
        form.set(BookingField::RoomNumber, "-3".into());
        form.set(BookingField::Cost, "cheap".into());
        form.set(BookingField::BookingEndDate, "10/08/2024".into());

        let errors = form.validate().unwrap_err();
        assert!(matches!(
            errors.field("roomType"),
            Some(FieldError::NotAnOption { .. })
        ));
        assert_eq!(errors.field("roomNumber"), Some(&FieldError::Negative("roomNumber")));
        assert_eq!(errors.field("cost"), Some(&FieldError::NotANumber("cost")));
        assert_eq!(
            errors.field("bookingEndDate"),
            Some(&FieldError::InvalidDate("bookingEndDate"))
        );
    }

    #[test]
    fn test_end_before_start() {
        let mut form = filled();
        form.set(BookingField::BookingEndDate, "2024-09-30".into());
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.field("bookingEndDate"),
            Some(&FieldError::EndBeforeStart("bookingEndDate"))
        );
    }

    #[test]
    fn test_optional_fields() {
        let mut form = filled();
        form.set(BookingField::BookingEndDate, String::new());
        form.set(BookingField::Notes, "  late check-in ".into());
        let req = form.validate().unwrap();
        assert_eq!(req.booking_end_date, None);
        assert_eq!(req.notes.as_deref(), Some("late check-in"));
    }

    #[test]
    fn test_summary_excludes_inline_fields() {
        let errors = BookingFormInput::new(1).validate().unwrap_err();
        let except = ["name", "roomType", "roomNumber", "cost"];
        let rest: Vec<_> = errors.summary(&except).map(|e| e.field()).collect();
        assert_eq!(rest, ["bookingStartDate"]);
    }

    #[test]
    fn test_get_set_roundtrip_by_field() {
        let mut form = BookingFormInput::new(1);
        for field in BookingField::ALL {
            form.set(field, field.id().to_string());
        }
        for field in BookingField::ALL {
            assert_eq!(form.get(field), field.id());
        }
    }
}

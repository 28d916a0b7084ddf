//! Form payloads
//!
//! Browsers send every field as text, so each field is a `String` defaulting
//! to empty. Conversion into records validates and normalizes: required
//! names are trimmed, blank optional fields become `None`.

use serde::Deserialize;
use shared::models::{Customer, Reservation};

use crate::utils::AppResult;
use crate::utils::time::parse_start_at;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, blank_to_none, parse_num_guests,
    validate_optional_text, validate_required_text,
};

/// Create / edit customer form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerForm {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(self.first_name.trim(), "firstName", MAX_NAME_LEN)?;
        validate_required_text(self.last_name.trim(), "lastName", MAX_NAME_LEN)?;
        validate_optional_text(&blank_to_none(&self.phone), "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&blank_to_none(&self.notes), "notes", MAX_NOTE_LEN)?;
        Ok(())
    }

    /// A new, unsaved customer
    pub fn into_new_customer(self) -> AppResult<Customer> {
        self.validate()?;
        Ok(Customer::new(
            self.first_name.trim(),
            self.last_name.trim(),
            blank_to_none(&self.phone),
            blank_to_none(&self.notes),
        ))
    }

    /// Overwrite the editable fields of `customer`, keeping its id
    pub fn apply_to(self, customer: &mut Customer) -> AppResult<()> {
        self.validate()?;
        customer.first_name = self.first_name.trim().to_string();
        customer.last_name = self.last_name.trim().to_string();
        customer.phone = blank_to_none(&self.phone);
        customer.notes = blank_to_none(&self.notes);
        Ok(())
    }
}

/// Add reservation form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationForm {
    pub start_at: String,
    pub num_guests: String,
    pub notes: String,
}

impl ReservationForm {
    /// A new, unsaved reservation for `customer_id`
    pub fn into_reservation(self, customer_id: i64) -> AppResult<Reservation> {
        let start_at = parse_start_at(&self.start_at)?;
        let num_guests = parse_num_guests(&self.num_guests)?;
        let notes = blank_to_none(&self.notes);
        validate_optional_text(&notes, "notes", MAX_NOTE_LEN)?;
        Ok(Reservation::new(customer_id, start_at, num_guests, notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;
    use shared::models::RecordKey;

    fn customer_form(first: &str, last: &str, phone: &str, notes: &str) -> CustomerForm {
        CustomerForm {
            first_name: first.into(),
            last_name: last.into(),
            phone: phone.into(),
            notes: notes.into(),
        }
    }

    #[test]
    fn test_new_customer_trims_and_nulls_blanks() {
        let c = customer_form("  Ana ", "Lee", "   ", "")
            .into_new_customer()
            .unwrap();
        assert_eq!(c.id, RecordKey::New);
        assert_eq!(c.first_name, "Ana");
        assert_eq!(c.last_name, "Lee");
        assert_eq!(c.phone, None);
        assert_eq!(c.notes, None);
    }

    #[test]
    fn test_blank_required_name_rejected() {
        let err = customer_form("Ana", "  ", "", "").into_new_customer().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_overlong_fields_rejected() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        let err = customer_form(&long_name, "Lee", "", "").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let long_phone = "1".repeat(MAX_SHORT_TEXT_LEN + 1);
        assert!(customer_form("Ana", "Lee", &long_phone, "").validate().is_err());

        let long_notes = "n".repeat(MAX_NOTE_LEN + 1);
        assert!(customer_form("Ana", "Lee", "", &long_notes).validate().is_err());
    }

    #[test]
    fn test_apply_to_keeps_id() {
        let mut c = Customer::new("Ana", "Lee", Some("555".into()), None);
        c.id = RecordKey::Persisted(7);
        customer_form("Anna", "Lee", "", "regular")
            .apply_to(&mut c)
            .unwrap();
        assert_eq!(c.id, RecordKey::Persisted(7));
        assert_eq!(c.first_name, "Anna");
        assert_eq!(c.phone, None);
        assert_eq!(c.notes.as_deref(), Some("regular"));
    }

    #[test]
    fn test_apply_to_invalid_leaves_customer_untouched() {
        let mut c = Customer::new("Ana", "Lee", None, None);
        let before = c.clone();
        assert!(customer_form("", "", "", "").apply_to(&mut c).is_err());
        assert_eq!(c, before);
    }

    #[test]
    fn test_reservation_form() {
        let form = ReservationForm {
            start_at: "2024-06-01T19:00".into(),
            num_guests: "4".into(),
            notes: "window seat".into(),
        };
        let r = form.into_reservation(3).unwrap();
        assert_eq!(r.customer_id, 3);
        assert_eq!(r.start_at, 1_717_268_400_000);
        assert_eq!(r.num_guests, 4);
        assert_eq!(r.notes.as_deref(), Some("window seat"));
    }

    #[test]
    fn test_reservation_form_rejects_bad_input() {
        let bad_date = ReservationForm {
            start_at: "next tuesday".into(),
            num_guests: "4".into(),
            notes: String::new(),
        };
        assert_eq!(
            bad_date.into_reservation(1).unwrap_err().code,
            ErrorCode::ReservationStartInvalid
        );

        for guests in ["0", "-2", "four", ""] {
            let form = ReservationForm {
                start_at: "2024-06-01T19:00".into(),
                num_guests: guests.into(),
                notes: String::new(),
            };
            assert_eq!(
                form.into_reservation(1).unwrap_err().code,
                ErrorCode::ReservationGuestsInvalid
            );
        }
    }
}

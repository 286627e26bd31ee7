use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::ContactKind;
use crate::types::error::AppError;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 255;
pub const MAX_CONTACT_LEN: usize = 100;

/// Text fields of the submission form. The photo travels as a separate
/// multipart part and never lands in this struct.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubmitItem {
    pub name: String,
    pub location: String,
    pub date_found: Option<NaiveDate>,
    pub contact: String,
}

impl SubmitItem {
    /// Presence + length checks, date not in the future. Runs before any
    /// storage call so a bad form never uploads anything.
    pub fn validate(&self) -> Result<NaiveDate, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation(
                "name must be at most 100 characters".to_string(),
            ));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::Validation("location is required".to_string()));
        }
        if self.location.chars().count() > MAX_LOCATION_LEN {
            return Err(AppError::Validation(
                "location must be at most 255 characters".to_string(),
            ));
        }
        let date_found = self
            .date_found
            .ok_or_else(|| AppError::Validation("date_found is required".to_string()))?;
        if date_found > Utc::now().date_naive() {
            return Err(AppError::Validation(
                "date_found cannot be in the future".to_string(),
            ));
        }
        if self.contact.trim().is_empty() {
            return Err(AppError::Validation("contact is required".to_string()));
        }
        if self.contact.chars().count() > MAX_CONTACT_LEN {
            return Err(AppError::Validation(
                "contact must be at most 100 characters".to_string(),
            ));
        }
        Ok(date_found)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DBItemCreate {
    pub name: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub date_found: NaiveDate,
    pub contact: String,
}

/// What the listing grid renders. `contact_kind`/`contact_href` are derived
/// server-side so clients never probe the contact string themselves.
#[derive(Serialize, Deserialize, Debug)]
pub struct ItemCard {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub date_found: NaiveDate,
    pub contact: String,
    pub contact_kind: ContactKind,
    pub contact_href: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::item::Model> for ItemCard {
    fn from(m: entity::item::Model) -> Self {
        let kind = ContactKind::classify(&m.contact);
        ItemCard {
            id: m.id,
            name: m.name,
            image_url: m.image_url,
            location: m.location,
            date_found: m.date_found,
            contact_href: kind.href(&m.contact),
            contact_kind: kind,
            contact: m.contact,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SubmitItem {
        SubmitItem {
            name: "Blue Water Bottle".to_string(),
            location: "Library 2nd Floor".to_string(),
            date_found: Some(Utc::now().date_naive()),
            contact: "a@b.com".to_string(),
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.location = String::new();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.contact = String::new();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.date_found = None;
        assert!(form.validate().is_err());
    }

    #[test]
    fn rejects_oversized_fields() {
        let mut form = valid_form();
        form.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.location = "x".repeat(MAX_LOCATION_LEN + 1);
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.contact = "x".repeat(MAX_CONTACT_LEN + 1);
        assert!(form.validate().is_err());
    }

    #[test]
    fn rejects_a_future_date() {
        let mut form = valid_form();
        form.date_found = Some(Utc::now().date_naive() + chrono::Duration::days(1));
        assert!(form.validate().is_err());
    }

    #[test]
    fn today_is_allowed() {
        let mut form = valid_form();
        form.date_found = Some(Utc::now().date_naive());
        assert!(form.validate().is_ok());
    }
}

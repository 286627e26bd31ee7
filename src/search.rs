use serde::{Deserialize, Serialize};

/// How a listing's contact string should be rendered. Contact is free text;
/// the only signal is whether it contains an "@".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Unknown,
}

impl ContactKind {
    pub fn classify(contact: &str) -> Self {
        let contact = contact.trim();
        if contact.is_empty() {
            ContactKind::Unknown
        } else if contact.contains('@') {
            ContactKind::Email
        } else {
            ContactKind::Phone
        }
    }

    /// Link target for a card, mailto: or tel:. Unknown gets no link.
    pub fn href(self, contact: &str) -> Option<String> {
        match self {
            ContactKind::Email => Some(format!("mailto:{}", contact)),
            ContactKind::Phone => Some(format!("tel:{}", contact)),
            ContactKind::Unknown => None,
        }
    }
}

/// Case-insensitive substring match on the item name only. Empty or
/// whitespace-only queries pass the snapshot through untouched, and order
/// is always preserved.
pub fn filter_by_name(
    items: Vec<entity::item::Model>,
    query: &str,
) -> Vec<entity::item::Model> {
    let query = query.trim();
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use uuid::Uuid;

    fn item(name: &str, age_secs: i64) -> entity::item::Model {
        entity::item::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image_url: None,
            location: Some("Library 2nd Floor".to_string()),
            date_found: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            contact: "a@b.com".to_string(),
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[test]
    fn empty_query_returns_the_full_set_in_order() {
        let items = vec![item("Blue Water Bottle", 0), item("Umbrella", 10)];
        let names: Vec<_> = filter_by_name(items, "")
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["Blue Water Bottle", "Umbrella"]);
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let items = vec![item("Keys", 0)];
        assert_eq!(filter_by_name(items, "   ").len(), 1);
    }

    #[test]
    fn match_is_case_insensitive() {
        let items = vec![item("Blue Water Bottle", 0), item("Umbrella", 10)];
        let hits = filter_by_name(items, "bottle");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Blue Water Bottle");
    }

    #[test]
    fn only_the_name_is_matched() {
        // "Library" appears in location, not name
        let items = vec![item("Keys", 0)];
        assert!(filter_by_name(items, "library").is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let items = vec![
            item("Blue Water Bottle", 0),
            item("Green Bottle", 10),
            item("Umbrella", 20),
        ];
        let once = filter_by_name(items, "bottle");
        let names_once: Vec<_> = once.iter().map(|i| i.name.clone()).collect();
        let twice = filter_by_name(once, "bottle");
        let names_twice: Vec<_> = twice.iter().map(|i| i.name.clone()).collect();
        assert_eq!(names_once, vec!["Blue Water Bottle", "Green Bottle"]);
        assert_eq!(names_once, names_twice);
    }

    #[test]
    fn no_match_yields_empty() {
        let items = vec![item("Blue Water Bottle", 0)];
        assert!(filter_by_name(items, "umbrella").is_empty());
    }

    #[test]
    fn contact_with_at_sign_is_email() {
        assert_eq!(ContactKind::classify("a@b.com"), ContactKind::Email);
        assert_eq!(
            ContactKind::classify("a@b.com").href("a@b.com"),
            Some("mailto:a@b.com".to_string())
        );
    }

    #[test]
    fn contact_without_at_sign_is_phone() {
        assert_eq!(ContactKind::classify("555-1234"), ContactKind::Phone);
        assert_eq!(
            ContactKind::classify("555-1234").href("555-1234"),
            Some("tel:555-1234".to_string())
        );
    }

    #[test]
    fn blank_contact_is_unknown() {
        assert_eq!(ContactKind::classify("  "), ContactKind::Unknown);
        assert_eq!(ContactKind::classify("").href(""), None);
    }
}

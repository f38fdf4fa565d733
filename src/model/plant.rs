use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// Opaque identifier assigned by the remote service.
///
/// The service may hand out numeric or string ids, so both JSON shapes are
/// accepted and written back unchanged. Text is never reinterpreted: `"0123"`
/// stays `Text("0123")`.
///
/// Two ids are equal when they render the same, so `Number(1)` matches
/// `Text("1")` typed on a command line, while `Text("0123")` does not match
/// `Number(123)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlantId {
    Number(u64),
    Text(String),
}

impl From<u64> for PlantId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<u32> for PlantId {
    fn from(id: u32) -> Self {
        Self::Number(u64::from(id))
    }
}

impl From<&str> for PlantId {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<String> for PlantId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl PartialEq for PlantId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(n), Self::Text(t)) | (Self::Text(t), Self::Number(n)) => {
                *t == n.to_string()
            }
        }
    }
}

impl Eq for PlantId {}

// Must agree with `eq`, so both shapes hash their rendered text.
impl Hash for PlantId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(id) => id.to_string().hash(state),
            Self::Text(id) => id.hash(state),
        }
    }
}

impl Display for PlantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A catalog entry as held by the remote plant service.
///
/// Records only ever come from the service: the `id` is assigned remotely and a
/// record without one cannot be constructed. Drafts live in
/// [`PlantDraft`](crate::model::PlantDraft) until the create call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub price: f64,
}

impl PlantRecord {
    /// Creates a new PlantRecord instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the service
    /// * `name` - Display name
    /// * `image` - Image URL or reference
    /// * `price` - Unit price
    pub fn new(
        id: impl Into<PlantId>,
        name: impl Into<String>,
        image: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            price,
        }
    }
}

/// Create payload sent to `POST /plants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
}

impl NewPlant {
    pub fn new(name: impl Into<String>, image: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price,
        }
    }

    /// Pairs the payload with the id the service assigned to it.
    pub fn into_record(self, id: PlantId) -> PlantRecord {
        PlantRecord {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numeric_and_string_ids() {
        let numeric: PlantRecord =
            serde_json::from_str(r#"{"id":1,"name":"Fern","image":"u","price":9.99}"#).unwrap();
        assert_eq!(numeric.id, PlantId::Number(1));

        let text: PlantRecord =
            serde_json::from_str(r#"{"id":"a1b2","name":"Fern","image":"u","price":9.99}"#)
                .unwrap();
        assert_eq!(text.id, PlantId::Text("a1b2".to_string()));
        assert_eq!(text.id.to_string(), "a1b2");
    }

    #[test]
    fn test_id_keeps_its_json_shape() {
        let record = PlantRecord::new(7u64, "Aloe", "aloe.png", 4.5);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], serde_json::json!(7));
    }

    #[test]
    fn test_text_ids_are_kept_as_given() {
        assert!(matches!(PlantId::from("0123"), PlantId::Text(ref id) if id == "0123"));
        assert_eq!(PlantId::from("0123").to_string(), "0123");
        assert_ne!(PlantId::from("0123"), PlantId::Number(123));
    }

    #[test]
    fn test_ids_compare_by_rendered_form() {
        use std::collections::HashSet;

        assert_eq!(PlantId::from("42"), PlantId::Number(42));
        assert_eq!(PlantId::Number(42), PlantId::from("42"));
        assert_ne!(PlantId::from("x-42"), PlantId::Number(42));

        let ids: HashSet<_> = [PlantId::Number(7), PlantId::from("7")].into_iter().collect();
        assert_eq!(ids.len(), 1);
    }
}

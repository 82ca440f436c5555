use bfly_types::{Butterfly, Rating, Record, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The whole datastore: three ordered collections.
///
/// A collection missing from the file loads as empty. Unknown top-level
/// keys are kept in `extra` and written back untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub butterflies: Vec<Butterfly>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.butterflies.len() + self.users.len() + self.ratings.len()
    }
}

/// A record type stored as one of the [`Document`]'s collections.
pub trait Collection: Record + Clone + Send + Sync + 'static {
    /// Top-level key of the collection in the document.
    const NAME: &'static str;

    fn items(document: &Document) -> &Vec<Self>;

    fn items_mut(document: &mut Document) -> &mut Vec<Self>;
}

impl Collection for Butterfly {
    const NAME: &'static str = "butterflies";

    fn items(document: &Document) -> &Vec<Self> {
        &document.butterflies
    }

    fn items_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.butterflies
    }
}

impl Collection for User {
    const NAME: &'static str = "users";

    fn items(document: &Document) -> &Vec<Self> {
        &document.users
    }

    fn items_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.users
    }
}

impl Collection for Rating {
    const NAME: &'static str = "ratings";

    fn items(document: &Document) -> &Vec<Self> {
        &document.ratings
    }

    fn items_mut(document: &mut Document) -> &mut Vec<Self> {
        &mut document.ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_collections_load_empty() {
        let doc: Document = serde_json::from_value(json!({ "users": [] })).unwrap();
        assert!(doc.butterflies.is_empty());
        assert!(doc.ratings.is_empty());
        assert_eq!(doc.record_count(), 0);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = json!({
            "butterflies": [],
            "users": [{ "id": "u1", "username": "flutterby" }],
            "ratings": [],
            "schemaVersion": 3
        });
        let doc: Document = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.extra.get("schemaVersion"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn malformed_record_is_rejected() {
        let raw = json!({ "butterflies": [{ "id": "b1" }] });
        assert!(serde_json::from_value::<Document>(raw).is_err());
    }

    #[test]
    fn collection_names() {
        assert_eq!(<Butterfly as Collection>::NAME, "butterflies");
        assert_eq!(<User as Collection>::NAME, "users");
        assert_eq!(<Rating as Collection>::NAME, "ratings");
    }

    #[test]
    fn items_mut_reaches_the_right_collection() {
        let mut doc = Document::new();
        User::items_mut(&mut doc).push(User { id: "u1".into(), username: "a".into() });
        assert_eq!(doc.users.len(), 1);
        assert_eq!(User::items(&doc)[0].id, "u1");
        assert!(Butterfly::items(&doc).is_empty());
    }
}

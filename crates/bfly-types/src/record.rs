use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A flat object stored in one of the datastore's collections.
pub trait Record {
    /// The record's identifier, unique within its collection.
    fn id(&self) -> &str;
}

/// A butterfly species entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Butterfly {
    pub id: String,
    /// Common name, e.g. "Zebra Swallowtail".
    pub common_name: String,
    /// Scientific name, e.g. "Protographium marcellus".
    pub species: String,
    /// URL of an article describing the butterfly.
    pub article: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
}

/// A user's score for a butterfly.
///
/// `user_id` and `butterfly_id` were checked against existing records when
/// the rating was created and are never re-checked afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub user_id: String,
    pub butterfly_id: String,
    /// Kept as the JSON number that was submitted so integers stay integers
    /// on the wire and in the datastore.
    pub rating: Number,
}

impl Rating {
    /// The rating as a float, for ordering and range checks.
    pub fn value(&self) -> f64 {
        self.rating.as_f64().unwrap_or(0.0)
    }
}

impl Record for Butterfly {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Rating {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Order ratings from highest to lowest score.
///
/// The sort is stable: equal scores keep their original (insertion) order.
pub fn sort_by_rating_desc(ratings: &mut [Rating]) {
    ratings.sort_by(|a, b| b.value().total_cmp(&a.value()));
}

//! Canonical starting data for a fresh datastore.

use bfly_types::{Butterfly, Rating, User};

use crate::document::Document;

const BUTTERFLIES: &[(&str, &str, &str)] = &[
    ("Hq4Rk_vOPMehRX2ar6LKX", "Zebra Swallowtail", "Protographium marcellus"),
    ("H7hhcEWLDsxyHN0cnDrBV", "Plum Judy", "Abisara echerius"),
    ("VJ5v4ZEQVL92XaaSl7xgD", "Red Pierrot", "Talicada nyseus"),
    ("juX-MCpw0NUW1xh40xgVc", "Texan Crescentspot", "Anthanassa texana"),
    ("HIoGrnyIiUeIvAyhaYpit", "Guava Skipper", "Phocides polybius"),
    ("HlvjJBL8BLw2HFETsr9Sv", "Mexican Bluewing", "Myscelia ethusa"),
];

const USERS: &[(&str, &str)] = &[
    ("-9aAFuyNIkpSzRMNux2BQ", "iluvbutterflies"),
    ("15rKqk4vDp7V5vE1MYG3t", "flutterby"),
    ("2rWtjZcs88ElPfRSSL3Zm", "metamorphosize_me"),
];

// (id, userId, butterflyId, rating)
const RATINGS: &[(&str, &str, &str, u8)] = &[
    ("UlKit1k8I1jNZUm4Tpy1B", "-9aAFuyNIkpSzRMNux2BQ", "HIoGrnyIiUeIvAyhaYpit", 0),
    ("Xk9Lm2nO3pQr4sT5uV6wY", "-9aAFuyNIkpSzRMNux2BQ", "Hq4Rk_vOPMehRX2ar6LKX", 5),
    ("A1b2C3d4E5f6G7h8I9j0K", "-9aAFuyNIkpSzRMNux2BQ", "H7hhcEWLDsxyHN0cnDrBV", 4),
    ("L1m2N3o4P5q6R7s8T9u0V", "15rKqk4vDp7V5vE1MYG3t", "VJ5v4ZEQVL92XaaSl7xgD", 3),
    ("W1x2Y3z4A5b6C7d8E9f0G", "15rKqk4vDp7V5vE1MYG3t", "juX-MCpw0NUW1xh40xgVc", 5),
    ("H1i2J3k4L5m6N7o8P9q0R", "15rKqk4vDp7V5vE1MYG3t", "HIoGrnyIiUeIvAyhaYpit", 2),
    ("S1t2U3v4W5x6Y7z8A9b0C", "2rWtjZcs88ElPfRSSL3Zm", "HlvjJBL8BLw2HFETsr9Sv", 4),
    ("D1e2F3g4H5i6J7k8L9m0N", "2rWtjZcs88ElPfRSSL3Zm", "Hq4Rk_vOPMehRX2ar6LKX", 3),
    ("O1p2Q3r4S5t6U7v8W9x0Y", "2rWtjZcs88ElPfRSSL3Zm", "H7hhcEWLDsxyHN0cnDrBV", 5),
    ("Z1a2B3c4D5e6F7g8H9i0J", "-9aAFuyNIkpSzRMNux2BQ", "VJ5v4ZEQVL92XaaSl7xgD", 4),
    ("K1l2M3n4O5p6Q7r8S9t0U", "15rKqk4vDp7V5vE1MYG3t", "Hq4Rk_vOPMehRX2ar6LKX", 5),
    ("V1w2X3y4Z5a6B7c8D9e0F", "2rWtjZcs88ElPfRSSL3Zm", "juX-MCpw0NUW1xh40xgVc", 2),
];

/// Six butterflies, three users and twelve ratings.
pub fn seed_document() -> Document {
    Document {
        butterflies: BUTTERFLIES
            .iter()
            .map(|(id, common_name, species)| Butterfly {
                id: (*id).into(),
                common_name: (*common_name).into(),
                species: (*species).into(),
                article: format!("https://en.wikipedia.org/wiki/{}", species.replace(' ', "_")),
            })
            .collect(),
        users: USERS
            .iter()
            .map(|(id, username)| User {
                id: (*id).into(),
                username: (*username).into(),
            })
            .collect(),
        ratings: RATINGS
            .iter()
            .map(|(id, user_id, butterfly_id, rating)| Rating {
                id: (*id).into(),
                user_id: (*user_id).into(),
                butterfly_id: (*butterfly_id).into(),
                rating: (*rating).into(),
            })
            .collect(),
        extra: Default::default(),
    }
}

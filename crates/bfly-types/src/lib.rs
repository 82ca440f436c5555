//! Foundation types for the butterfly ratings API.
//!
//! Every other `bfly-*` crate depends on `bfly-types`. It owns the record
//! shapes persisted in the datastore and the validators that guard every
//! mutation.
//!
//! # Key Types
//!
//! - [`Butterfly`], [`User`], [`Rating`]: records, each identified by `id`
//! - [`ButterflyInput`], [`UserInput`], [`RatingInput`]: creation payloads
//!   accepted only in their exact shape
//! - [`RatingUpdate`]: the looser payload accepted when changing a rating
//! - [`IdGenerator`]: source of fresh record identifiers

pub mod error;
pub mod id;
pub mod payload;
pub mod record;

pub use error::ValidationError;
pub use id::{IdGenerator, RandomIdGenerator, SequenceIdGenerator, ID_LENGTH};
pub use payload::{ButterflyInput, RatingInput, RatingUpdate, UserInput, MAX_RATING, MIN_RATING};
pub use record::{sort_by_rating_desc, Butterfly, Rating, Record, User};

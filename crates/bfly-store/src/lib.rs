//! Single-file JSON document store.
//!
//! The whole datastore is one JSON document with three top-level
//! collections (`butterflies`, `users`, `ratings`). It is read once into
//! memory and every mutation rewrites the complete document.
//!
//! # Pieces
//!
//! - [`Document`] -- the in-memory tree, one `Vec` per collection
//! - [`Collection`] -- maps a record type onto its collection
//! - [`DocumentStore`] -- find / filter / push / assign / remove
//! - [`StoreCell`] -- initialize-once holder shared by every request
//!
//! # Storage Backends
//!
//! All backends implement the [`Backend`] trait:
//!
//! - [`JsonFileBackend`] -- the document lives in a file on disk
//! - [`MemoryBackend`] -- nothing leaves the process; for tests
//!
//! # Design Rules
//!
//! 1. Collections keep insertion order. Scans never reorder records.
//! 2. A mutation is persisted before the call returns.
//! 3. Mutations are serialized by the document lock, persist included.
//! 4. Top-level keys other than the three collections survive rewrites.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod cell;
pub mod document;
pub mod error;
pub mod file;
pub mod memory;
pub mod seed;
pub mod store;
pub mod traits;

pub use cell::StoreCell;
pub use document::{Collection, Document};
pub use error::{StoreError, StoreResult};
pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use seed::seed_document;
pub use store::DocumentStore;
pub use traits::Backend;

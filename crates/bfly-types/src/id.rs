use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Length of generated identifiers.
pub const ID_LENGTH: usize = 21;

/// URL-safe alphabet (64 symbols).
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Source of fresh record identifiers.
///
/// Identifiers are opaque strings. Callers that need uniqueness within a
/// collection must still check for collisions.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 21-character URL-safe identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Hands out a queued list of identifiers, then falls back to random ones.
///
/// Intended for tests and demos where created ids must be predictable.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    queue: Mutex<VecDeque<String>>,
}

impl SequenceIdGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Queue another identifier.
    pub fn push(&self, id: impl Into<String>) {
        self.queue.lock().expect("lock poisoned").push_back(id.into());
    }

    /// Number of queued identifiers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.lock().expect("lock poisoned").len()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let next = self.queue.lock().expect("lock poisoned").pop_front();
        next.unwrap_or_else(|| RandomIdGenerator.generate())
    }
}

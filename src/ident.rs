//! Unique-ID generation.
//!
//! Random letter identifiers for dynamically created elements, unique per
//! process: every issued ID is recorded in a registry and never handed out
//! twice. A dedicated [`IdRegistry`] can be used for an isolated ID space;
//! the free functions share one process-wide registry.
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, OnceLock};

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ID length used when the caller passes 0.
pub const DEFAULT_ID_LEN: usize = 6;

/// Collision attempts at one length before the length grows.
const MAX_COLLISIONS_PER_LEN: usize = 64;

/// A space of already-issued IDs.
#[derive(Debug)]
pub struct IdRegistry {
    issued: Mutex<HashSet<String>>,
}

impl IdRegistry {
    pub fn new() -> Self {
        // Seeding the empty string keeps the generation loop from ever
        // returning an empty ID.
        let mut issued = HashSet::new();
        issued.insert(String::new());
        Self {
            issued: Mutex::new(issued),
        }
    }

    /// Returns a fresh random ID of `len` letters (0 means
    /// [`DEFAULT_ID_LEN`]), distinct from every ID this registry has
    /// issued before.
    ///
    /// If the ID space at the requested length fills up, the length grows
    /// until a free ID is found, so this always terminates.
    pub fn unique_id(&self, len: usize) -> String {
        let mut len = if len == 0 { DEFAULT_ID_LEN } else { len };
        let mut issued = self.lock();
        let mut rng = rand::thread_rng();
        let mut collisions = 0;

        let mut id = String::new();
        while issued.contains(&id) {
            if collisions == MAX_COLLISIONS_PER_LEN {
                len += 1;
                collisions = 0;
            }
            id = (0..len)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect();
            collisions += 1;
        }

        issued.insert(id.clone());
        id
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        match self.issued.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn global_registry() -> &'static IdRegistry {
    static REGISTRY: OnceLock<IdRegistry> = OnceLock::new();
    REGISTRY.get_or_init(IdRegistry::new)
}

/// Returns a fresh ID of `len` letters from the process-wide registry.
pub fn unique_id(len: usize) -> String {
    global_registry().unique_id(len)
}

/// Returns a fresh ID of the default length from the process-wide registry.
pub fn unique_id_default() -> String {
    unique_id(DEFAULT_ID_LEN)
}

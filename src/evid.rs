//! Event-id canonicalization for PHA output.
//!
//! PHA event ids must be numeric strings of at most nine digits, unique
//! within one file. [`EventIdMapper`] holds the state of one write session:
//! forced mappings, claimed ids and the fallback counter. Assignments are
//! deterministic for a fixed id sequence; the counter fallback depends on
//! assignment order, not on id content.

use std::collections::{HashMap, HashSet};

use crate::{PhaError, Result};

/// First fallback id handed out when a source id yields no usable digits
/// or collides with an already claimed id.
const FALLBACK_START: u64 = 1000;

/// Per-session event-id canonicalizer.
#[derive(Debug, Clone)]
pub struct EventIdMapper {
    map: HashMap<String, String>,
    used: HashSet<String>,
    counter: u64,
}

impl EventIdMapper {
    /// A fresh session with no forced mappings.
    pub fn new() -> Self {
        Self::with_forced(HashMap::new())
    }

    /// A session seeded with forced `original id -> numeric id` mappings.
    /// All forced values count as claimed from the start.
    pub fn with_forced(map: HashMap<String, String>) -> Self {
        let used = map.values().cloned().collect();
        Self {
            map,
            used,
            counter: FALLBACK_START,
        }
    }

    /// Canonicalize one source event id.
    ///
    /// A forced mapping is used verbatim after validation; anything else is
    /// reduced to its digits, truncated to nine, and replaced by the next
    /// free counter value while empty or already claimed. Renames are
    /// recorded in the session map.
    pub fn assign(&mut self, evid: &str) -> Result<String> {
        if let Some(mapped) = self.map.get(evid) {
            if !is_valid_pha_id(mapped) {
                return Err(PhaError::InvalidIdMapping {
                    original: evid.to_string(),
                    mapped: mapped.clone(),
                });
            }
            return Ok(mapped.clone());
        }

        let mut id: String = evid.chars().filter(char::is_ascii_digit).collect();
        id.truncate(9);
        while id.is_empty() || self.used.contains(&id) {
            id = self.counter.to_string();
            self.counter += 1;
        }
        if id != evid {
            self.map.insert(evid.to_string(), id.clone());
        }
        self.used.insert(id.clone());
        Ok(id)
    }

    /// Consume the session, returning the mapping table, or `None` when no
    /// id was remapped and no forced mapping was supplied.
    pub fn into_map(self) -> Option<HashMap<String, String>> {
        if self.map.is_empty() {
            None
        } else {
            Some(self.map)
        }
    }
}

impl Default for EventIdMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_pha_id(s: &str) -> bool {
    !s.is_empty() && s.len() <= 9 && s.bytes().all(|b| b.is_ascii_digit())
}

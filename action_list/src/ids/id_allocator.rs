/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{collections::{HashMap, HashSet},
          fmt::{Display, Formatter, Result, Write as _}};

use serde::{Deserialize, Serialize};

use super::generate_friendly_strongly_random_id;
use crate::{DEBUG_ACTION_LIST, InlineString};

/// Caller supplied identity of an item. It stays the same for as long as the item is
/// in the list, across any number of composition passes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub String);

impl From<&str> for ItemKey {
    fn from(key: &str) -> Self { Self(key.to_string()) }
}

impl From<String> for ItemKey {
    fn from(key: String) -> Self { Self(key) }
}

impl From<u64> for ItemKey {
    fn from(key: u64) -> Self { Self(key.to_string()) }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

/// Base id of one item. All the ids in [`crate::IdentifierSet`] are derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub InlineString);

impl ItemId {
    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self { Self(id.into()) }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

/// How [`IdAllocator`] generates ids for items that don't have an explicit one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `action-list-item-0`, `action-list-item-1`, and so on. Deterministic, which
    /// makes it the right choice for snapshots and tests.
    #[default]
    Sequential,
    /// See [`generate_friendly_strongly_random_id`]. Unique across allocators too.
    FriendlyRandom,
}

pub const SEQUENTIAL_ID_PREFIX: &str = "action-list-item";

/// Hands out one stable id per [`ItemKey`].
///
/// ```text
/// pass 1: key "copy" ──► miss ──► generate "action-list-item-0" ──► cache
/// pass 2: key "copy" ──► hit  ──────────────────────────────────► "action-list-item-0"
/// ```
///
/// An explicit id supplied by the caller always wins and is never cached, so a caller
/// that stops passing it gets the generated id back. Call [`IdAllocator::forget`] when
/// an item leaves the list.
///
/// Explicit ids are remembered as reserved, and generation skips them. So an item with
/// the explicit id `action-list-item-0` pushes the next generated id to
/// `action-list-item-1`. This only works in that order: an explicit id that matches an
/// id that was already generated for another key is still handed out. Keeping explicit
/// ids unique against earlier generated ones is up to the caller.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    strategy: IdStrategy,
    next: u64,
    ids: HashMap<ItemKey, ItemId>,
    reserved: HashSet<ItemId>,
}

impl IdAllocator {
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn strategy(&self) -> IdStrategy { self.strategy }

    pub fn item_id(&mut self, explicit: Option<&str>, key: &ItemKey) -> ItemId {
        if let Some(explicit) = explicit.filter(|it| !it.is_empty()) {
            let id = ItemId::from(explicit);
            self.reserved.insert(id.clone());
            return id;
        }

        if let Some(id) = self.ids.get(key) {
            return id.clone();
        }

        let id = self.generate();
        DEBUG_ACTION_LIST.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Generated item id", key = %key, id = %id);
        });
        self.ids.insert(key.clone(), id.clone());
        id
    }

    /// Returns the id that was released, if the key had one.
    pub fn forget(&mut self, key: &ItemKey) -> Option<ItemId> { self.ids.remove(key) }

    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    fn generate(&mut self) -> ItemId {
        loop {
            let id = self.generate_candidate();
            if !self.reserved.contains(&id) {
                return id;
            }
            DEBUG_ACTION_LIST.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(message = "Skipped id reserved by an explicit id", id = %id);
            });
        }
    }

    fn generate_candidate(&mut self) -> ItemId {
        match self.strategy {
            IdStrategy::Sequential => {
                let mut acc = InlineString::new();
                _ = write!(acc, "{SEQUENTIAL_ID_PREFIX}-{}", self.next);
                self.next += 1;
                ItemId(acc)
            }
            IdStrategy::FriendlyRandom => ItemId(generate_friendly_strongly_random_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_same_key_same_id_across_passes() {
        let mut ids = IdAllocator::default();
        let key = ItemKey::from("copy");
        let first = ids.item_id(None, &key);
        let second = ids.item_id(None, &key);
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "action-list-item-0");
    }

    #[test_case(IdStrategy::Sequential)]
    #[test_case(IdStrategy::FriendlyRandom)]
    fn test_distinct_keys_distinct_ids(strategy: IdStrategy) {
        let mut ids = IdAllocator::new(strategy);
        let first = ids.item_id(None, &ItemKey::from(1));
        let second = ids.item_id(None, &ItemKey::from(2));
        assert_ne!(first, second);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_explicit_id_wins_and_is_not_cached() {
        let mut ids = IdAllocator::default();
        let key = ItemKey::from("paste");
        assert_eq!(ids.item_id(Some("paste-item"), &key).as_str(), "paste-item");
        assert!(ids.is_empty());
        assert_eq!(ids.item_id(None, &key).as_str(), "action-list-item-0");
    }

    #[test]
    fn test_generated_ids_skip_explicit_ids() {
        let mut ids = IdAllocator::default();
        let explicit = ids.item_id(Some("action-list-item-0"), &ItemKey::from("x"));
        let generated = ids.item_id(None, &ItemKey::from("y"));
        assert_eq!(explicit.as_str(), "action-list-item-0");
        assert_eq!(generated.as_str(), "action-list-item-1");

        ids.item_id(Some("action-list-item-2"), &ItemKey::from("z"));
        assert_eq!(ids.item_id(None, &ItemKey::from("w")).as_str(), "action-list-item-3");
    }

    #[test]
    fn test_empty_explicit_id_is_ignored() {
        let mut ids = IdAllocator::default();
        let id = ids.item_id(Some(""), &ItemKey::from("a"));
        assert_eq!(id.as_str(), "action-list-item-0");
    }

    #[test]
    fn test_forget_releases_key() {
        let mut ids = IdAllocator::default();
        let key = ItemKey::from("a");
        let first = ids.item_id(None, &key);
        assert_eq!(ids.forget(&key), Some(first.clone()));
        assert_eq!(ids.forget(&key), None);
        let second = ids.item_id(None, &key);
        assert_ne!(first, second);
    }
}

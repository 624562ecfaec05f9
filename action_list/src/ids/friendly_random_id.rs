/*
 *   Copyright (c) 2024-2026 R3BL LLC
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

use std::fmt::Write as _;

use rand::{Rng, rngs::ThreadRng};

use crate::InlineString;

const BIRD_NAMES: [&str; 16] = [
    "robin", "wren", "finch", "heron", "swift", "crane", "lark", "owl", "kite", "raven",
    "egret", "jay", "plover", "tern", "dove", "stork",
];

const TREE_NAMES: [&str; 16] = [
    "oak", "ash", "elm", "birch", "cedar", "maple", "pine", "willow", "alder", "aspen",
    "beech", "hazel", "larch", "rowan", "yew", "linden",
];

/// Generates an id like `wren-cedar-042-<uuid v4>`. The prefix makes it readable in
/// markup and logs, the uuid makes collisions practically impossible. Ids must start
/// with a letter to be usable in `aria-*` references, which the word prefix ensures.
#[must_use]
pub fn generate_friendly_strongly_random_id() -> InlineString {
    let mut rng: ThreadRng = rand::rng();

    let bird = BIRD_NAMES[rng.random_range(0..BIRD_NAMES.len())];
    let tree = TREE_NAMES[rng.random_range(0..TREE_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);
    let uuid = uuid::Uuid::new_v4();

    let mut acc = InlineString::new();
    _ = write!(acc, "{bird}-{tree}-{number:03}-{uuid}");
    acc
}

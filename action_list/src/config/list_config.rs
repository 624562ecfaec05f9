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

//! A JSON document that describes one list: its scopes and its items.
//!
//! ```json
//! {
//!   "list": {"variant": "inset", "role": "listbox", "selection_variant": "single"},
//!   "container": {"kind": "SelectPanel", "selection_attribute": "aria-selected"},
//!   "items": [
//!     {"key": "a", "selected": true, "children": [{"type": "text", "value": "Alpha"}]},
//!     {"key": "b", "after_divider": true, "variant": "danger",
//!      "children": [{"type": "text", "value": "Delete"}]}
//!   ]
//! }
//! ```

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ActionListError, ActionListItem, AmbientScopes, CommonResult, ContainerScope,
            DEBUG_ACTION_LIST, GroupScope, ItemPosition, ItemProps, ListScope, Node, ok};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub list: Option<ListScope>,
    pub group: Option<GroupScope>,
    pub container: Option<ContainerScope>,
    pub items: Vec<ItemConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub key: String,
    #[serde(flatten)]
    pub props: ItemProps,
    #[serde(default)]
    pub children: Vec<Node>,
    /// A divider or a group heading sits right before this item.
    #[serde(default)]
    pub after_divider: bool,
}

impl ListConfig {
    /// Parses a list description. Item keys must be unique within the document, since
    /// each item's ids are generated from its key.
    pub fn try_from_str(text: &str) -> CommonResult<Self> {
        let config: Self = serde_json::from_str(text).map_err(ActionListError::ConfigParse)?;

        let mut seen = HashSet::with_capacity(config.items.len());
        if let Some(item) = config.items.iter().find(|it| !seen.insert(it.key.as_str())) {
            return Err(ActionListError::DuplicateKey {
                key: item.key.clone(),
            }
            .into());
        }

        DEBUG_ACTION_LIST.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Loaded list description", items = config.items.len());
        });
        ok!(config)
    }

    pub fn try_from_path(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            ActionListError::ConfigRead {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::try_from_str(&text)
    }

    /// Borrows the scopes that are present.
    #[must_use]
    pub fn scopes(&self) -> AmbientScopes<'_> {
        AmbientScopes {
            list: self.list.as_ref(),
            group: self.group.as_ref(),
            container: self.container.as_ref(),
        }
    }

    /// Builds one item per entry, in order, with its [`ItemPosition`] filled in.
    #[must_use]
    pub fn build_items(&self) -> Vec<ActionListItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let position = match (index, item.after_divider) {
                    (0, _) => ItemPosition::First,
                    (_, true) => ItemPosition::AfterDivider,
                    (_, false) => ItemPosition::AfterItem,
                };
                ActionListItem::new(item.key.as_str(), item.children.clone())
                    .with_props(item.props.clone())
                    .with_position(position)
            })
            .collect()
    }
}

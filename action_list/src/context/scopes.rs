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

use std::{fmt::{Debug, Formatter, Result},
          sync::Arc};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::AriaRole;

/// Called by the enclosing container after an item's select action ran and was not
/// marked as handled. Eg: an action menu closes its overlay.
pub type AfterSelectHook = Arc<dyn Fn() + Send + Sync>;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr,
    Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ListVariant {
    #[default]
    Inset,
    Full,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SelectionVariant {
    Single,
    Multiple,
}

/// The overlay an item list is rendered in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
    EnumString,
)]
pub enum ContainerKind {
    ActionMenu,
    SelectPanel,
}

/// Attribute a container uses to expose an item's `selected` state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
    EnumString,
)]
pub enum SelectionAttribute {
    #[serde(rename = "aria-selected")]
    #[strum(serialize = "aria-selected")]
    AriaSelected,
    #[serde(rename = "aria-checked")]
    #[strum(serialize = "aria-checked")]
    AriaChecked,
}

/// Provided by the enclosing list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListScope {
    pub variant: ListVariant,
    pub role: Option<AriaRole>,
    pub show_dividers: bool,
    pub selection_variant: Option<SelectionVariant>,
}

impl ListScope {
    #[must_use]
    pub fn with_variant(mut self, variant: ListVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: AriaRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_dividers(mut self, show_dividers: bool) -> Self {
        self.show_dividers = show_dividers;
        self
    }

    #[must_use]
    pub fn with_selection_variant(mut self, selection_variant: SelectionVariant) -> Self {
        self.selection_variant = Some(selection_variant);
        self
    }
}

/// Provided by an enclosing group inside a list. Its selection variant is more
/// specific than the list's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupScope {
    pub selection_variant: Option<SelectionVariant>,
}

impl GroupScope {
    #[must_use]
    pub fn new(selection_variant: Option<SelectionVariant>) -> Self {
        Self { selection_variant }
    }
}

/// Provided by the overlay (if any) that hosts the list.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerScope {
    pub kind: Option<ContainerKind>,
    pub selection_attribute: Option<SelectionAttribute>,
    #[serde(skip)]
    pub after_select: Option<AfterSelectHook>,
}

impl ContainerScope {
    #[must_use]
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_selection_attribute(mut self, attribute: SelectionAttribute) -> Self {
        self.selection_attribute = Some(attribute);
        self
    }

    #[must_use]
    pub fn with_after_select(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.after_select = Some(Arc::new(hook));
        self
    }
}

impl Debug for ContainerScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ContainerScope")
            .field("kind", &self.kind)
            .field("selection_attribute", &self.selection_attribute)
            .field("after_select", &self.after_select.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// Borrowed view of the three scopes an item sits in. Any of them may be missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientScopes<'a> {
    pub list: Option<&'a ListScope>,
    pub group: Option<&'a GroupScope>,
    pub container: Option<&'a ContainerScope>,
}

impl<'a> AmbientScopes<'a> {
    #[must_use]
    pub fn with_list(mut self, list: &'a ListScope) -> Self {
        self.list = Some(list);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: &'a GroupScope) -> Self {
        self.group = Some(group);
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: &'a ContainerScope) -> Self {
        self.container = Some(container);
        self
    }
}

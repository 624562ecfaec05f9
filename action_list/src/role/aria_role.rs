// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The ARIA roles that lists and their items can carry.
///
/// `option` and `none` are spelled `ListOption` and `RoleNone` so they never shadow
/// [`Option`] and [`None`] from the prelude.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AriaRole {
    List,
    ListBox,
    Menu,
    Group,
    ListItem,
    MenuItem,
    MenuItemRadio,
    MenuItemCheckbox,
    Button,
    #[serde(rename = "option")]
    #[strum(serialize = "option")]
    ListOption,
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    RoleNone,
}

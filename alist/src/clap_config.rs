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

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use r3bl_action_list::InputEvent;

#[derive(Debug, Parser)]
#[command(bin_name = "alist")]
#[command(about = "📋 Compose accessible action list items from a JSON description")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(
        long,
        short = 'f',
        value_name = "FILE",
        help = "JSON file that describes the list scopes and its items"
    )]
    pub file: PathBuf,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Markup,
        help = "How to print the composed items"
    )]
    pub format: OutputFormat,

    #[arg(
        long,
        short = 's',
        value_name = "KEY",
        help = "Simulate a select on the item with this key, after printing the list"
    )]
    pub select: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = SelectEvent::Click,
        help = "Input event used by --select"
    )]
    pub event: SelectEvent,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `alist_log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(help = "Indented markup of each list item element")]
    Markup,
    #[clap(help = "Attributes, ids, layout decisions and content tree as JSON")]
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SelectEvent {
    Click,
    Enter,
    Space,
    #[clap(help = "Escape key, which is never a select action")]
    Esc,
}

impl From<SelectEvent> for InputEvent {
    fn from(event: SelectEvent) -> Self {
        match event {
            SelectEvent::Click => InputEvent::Click,
            SelectEvent::Enter => InputEvent::enter(),
            SelectEvent::Space => InputEvent::space(),
            SelectEvent::Esc => InputEvent::Keyboard(r3bl_action_list::Key::SpecialKey(
                r3bl_action_list::SpecialKey::Esc,
            )),
        }
    }
}

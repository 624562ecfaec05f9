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

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_action_list::{CommonResult, ListConfig, ok, try_initialize_logging_global};
use r3bl_alist::{CLIArg, try_render, try_select};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let res = try_run(&cli_arg);

    if let Err(error) = &res {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run alist due to the following problem",
            error = ?error
        );
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    res
}

fn try_run(cli_arg: &CLIArg) -> CommonResult<()> {
    let config = ListConfig::try_from_path(&cli_arg.file)?;

    print!("{}", try_render(&config, cli_arg.format)?);

    if let Some(key) = &cli_arg.select {
        let report = try_select(&config, key, cli_arg.event.into())?;
        println!("{report}");
    }

    ok!()
}

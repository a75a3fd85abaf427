// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::process::ExitCode;

use dossier::model::Workspace;
use dossier::tui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Options {
    demo: bool,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--demo" => options.demo = true,
            "-h" | "--help" => return Err(String::new()),
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(options)
}

fn print_usage() {
    eprintln!("usage: dossier [--demo]");
    eprintln!();
    eprintln!("  --demo    start with a sample workspace instead of an empty one");
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("dossier: {message}");
                eprintln!();
            }
            print_usage();
            return ExitCode::from(2);
        }
    };

    let workspace = if options.demo { tui::demo_workspace() } else { Workspace::new() };
    if let Err(err) = tui::run_with_workspace(workspace) {
        eprintln!("dossier: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

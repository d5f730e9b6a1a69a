//! CLI Module
//!
//! Read-only commands that print the seeded catalog without launching the
//! TUI. Output goes through the same view filters the TUI uses.

pub mod commands;

use crate::config::Settings;
use crate::store::{Action, AppState, reduce};
use anyhow::Result;
use colored::Colorize;
use commands::gutter;
use std::io::{self, Write};

/// Narrows the seeded state to one software package and search query
fn scoped(mut state: AppState, software: Option<&str>, query: Option<&str>) -> Option<AppState> {
    if let Some(wanted) = software {
        let found = state
            .software
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(wanted) || s.name.eq_ignore_ascii_case(wanted))
            .cloned()?;
        state = reduce(state, Action::SetActiveSoftware(found));
    }
    if let Some(query) = query {
        state = reduce(state, Action::SetSearchQuery(query.to_string()));
    }
    Some(state)
}

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String], settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(command) = args.first() else {
        print_help(&mut out)?;
        return Ok(());
    };

    let state = settings.initial_state();
    let software = args.get(1).map(String::as_str);
    let query = args.get(2).map(String::as_str);

    if command == "help" {
        print_help(&mut out)?;
        return Ok(());
    }

    let Some(state) = scoped(state.clone(), software, query) else {
        writeln!(
            out,
            "{}  Unknown software: {}",
            gutter(),
            software.unwrap_or_default()
        )?;
        commands::list_software(&mut out, &state)?;
        return Ok(());
    };

    match command.as_str() {
        "software" => commands::list_software(&mut out, &state)?,
        "folders" => commands::list_folders(&mut out, &state)?,
        "notes" => commands::list_notes(&mut out, &state)?,
        "shortcuts" => commands::list_shortcuts(&mut out, &state)?,
        "keys" | "keyboard" => commands::list_keys(&mut out, &state)?,
        "dump" => commands::dump(&mut out, &state)?,
        _ => {
            writeln!(out, "{}  Unknown command: {}", gutter(), command)?;
            print_help(&mut out)?;
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}  {}", gutter(), "LEARN3D - 3D SOFTWARE NOTEBOOK".bold())?;
    writeln!(out, "{}  {}", gutter(), "USAGE:".bright_yellow())?;
    writeln!(out, "{}  learn3d [COMMAND] [SOFTWARE] [QUERY]", gutter())?;
    writeln!(out, "{}  {}", gutter(), "COMMANDS:".bright_yellow())?;

    let commands = [
        ("software", "List the software catalog"),
        ("folders [SOFTWARE]", "List folders"),
        ("notes [SOFTWARE] [QUERY]", "List notes matching the query"),
        ("shortcuts [SOFTWARE] [QUERY]", "List shortcuts by category"),
        ("keys [SOFTWARE]", "Show which keys have shortcuts"),
        ("dump", "Print the whole state as JSON"),
        ("help", "Display this help message"),
    ];
    for (name, about) in commands {
        writeln!(out, "{}  {:<30} {}", gutter(), name.bright_white(), about)?;
    }

    writeln!(out, "{}  {}", gutter(), "TIP:".bright_green())?;
    writeln!(
        out,
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        gutter()
    )
}

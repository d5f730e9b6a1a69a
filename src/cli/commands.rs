use crate::models::keyboard::ROWS;
use crate::search::{self, KeyboardMap};
use crate::store::AppState;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

pub(crate) fn gutter() -> ColoredString {
    "┃".bright_magenta()
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).bright_magenta())
}

fn heading(out: &mut impl Write, state: &AppState, what: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}  {} {}",
        gutter(),
        state.active_software.label().bold(),
        what.bright_green().bold()
    )?;
    if !state.search_query.is_empty() {
        writeln!(
            out,
            "{}  {}: {}",
            gutter(),
            "Query".bright_yellow(),
            state.search_query
        )?;
    }
    rule(out)
}

fn nothing_found(out: &mut impl Write, what: &str) -> io::Result<()> {
    writeln!(out, "{}  No {} found", gutter(), what)
}

pub fn list_software(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(out, "{}  {}", gutter(), "SOFTWARE".bright_green().bold())?;
    rule(out)?;
    for software in &state.software {
        let marker = if software.id == state.active_software.id {
            "*".bright_yellow()
        } else {
            " ".normal()
        };
        writeln!(
            out,
            "{} {} {:<12} {}",
            gutter(),
            marker,
            software.id.bright_white(),
            software.label()
        )?;
    }
    Ok(())
}

pub fn list_folders(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    heading(out, state, "FOLDERS")?;
    let folders = search::visible_folders(state);
    if folders.is_empty() {
        return nothing_found(out, "folders");
    }

    for folder in folders {
        let (notes, shortcuts) = search::folder_item_counts(state, &folder.id);
        writeln!(
            out,
            "{}  {} {}  {}",
            gutter(),
            "󰉋".yellow(),
            folder.name.bright_white(),
            format!(
                "created {} · {} notes · {} shortcuts",
                folder.created_label(),
                notes,
                shortcuts
            )
            .dimmed()
        )?;
    }
    Ok(())
}

pub fn list_notes(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    heading(out, state, "NOTES")?;
    let notes = search::visible_notes(state);
    if notes.is_empty() {
        return nothing_found(out, "notes");
    }

    for note in notes {
        writeln!(out, "{}  {}", gutter(), note.title.bright_white().bold())?;
        writeln!(out, "{}    {}", gutter(), note.preview(72))?;
        let mut meta = format!("updated {}", note.updated_label());
        if !note.tags.is_empty() {
            meta.push_str(&format!(" · {}", note.tags_display()));
        }
        writeln!(out, "{}    {}", gutter(), meta.dimmed())?;
    }
    Ok(())
}

/// Shortcuts grouped by category, in the same buckets as the TUI tabs
pub fn list_shortcuts(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    heading(out, state, "SHORTCUTS")?;
    let shortcuts = search::visible_shortcuts(state);
    if shortcuts.is_empty() {
        return nothing_found(out, "shortcuts");
    }

    for bucket in search::category_buckets(&shortcuts).iter().skip(1) {
        writeln!(out, "{}  {}", gutter(), bucket.label().bright_yellow())?;
        for shortcut in &bucket.shortcuts {
            writeln!(
                out,
                "{}    {:<16} {:<20} {}",
                gutter(),
                shortcut.keys_display().bright_cyan().bold(),
                shortcut.action,
                shortcut.description.dimmed()
            )?;
        }
    }
    Ok(())
}

/// The keyboard layout with bound keys marked, then each bound key's actions
pub fn list_keys(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    heading(out, state, "KEYBOARD")?;
    let shortcuts = search::visible_shortcuts(state);
    let map = KeyboardMap::build(&shortcuts);

    for row in ROWS {
        let keys: Vec<String> = row
            .iter()
            .map(|label| {
                if map.is_active(label) {
                    format!("[{}]", label).bright_cyan().bold().to_string()
                } else {
                    format!(" {} ", label).dimmed().to_string()
                }
            })
            .collect();
        writeln!(out, "{}  {}", gutter(), keys.join(""))?;
    }

    rule(out)?;
    writeln!(
        out,
        "{}  {} keys bound",
        gutter(),
        map.active_key_count().to_string().bright_yellow()
    )?;

    let mut seen = Vec::new();
    for label in ROWS.iter().flat_map(|row| row.iter()) {
        if map.is_active(label) && !seen.contains(label) {
            seen.push(*label);
            writeln!(
                out,
                "{}  {:<10} {}",
                gutter(),
                label.bright_cyan(),
                map.tooltip(label)
            )?;
        }
    }
    Ok(())
}

pub fn dump(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    writeln!(out, "{}", json)
}

//! Rendering for each inspector subcommand.
//!
//! Every command returns the text to print so the output can be checked
//! without spawning the binary.

use std::fmt::Write;

use anyhow::Result;
use cryptocolors_abi::hash::to_hex_prefixed;
use cryptocolors_abi::{EntryRef, EventEntry, FunctionEntry, InterfaceTable};

/// Which categories `list` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Operations,
    Notifications,
}

pub fn list(table: &InterfaceTable, filter: ListFilter) -> String {
    let mut out = String::new();
    if filter != ListFilter::Notifications {
        for function in table.list_operations() {
            let _ = writeln!(out, "{}", describe_operation(function));
        }
    }
    if filter != ListFilter::Operations {
        for event in table.list_notifications() {
            let _ = writeln!(out, "{}", describe_notification(event));
        }
    }
    out
}

/// Resolves `name` and prints the entry as JSON.
pub fn resolve(table: &InterfaceTable, name: &str) -> Result<String> {
    let json = match table.resolve(name)? {
        EntryRef::Operation(function) => serde_json::to_string_pretty(function)?,
        EntryRef::Notification(event) => serde_json::to_string_pretty(event)?,
    };
    Ok(json)
}

/// Selector and topic hashes for every entry.
pub fn signatures(table: &InterfaceTable) -> String {
    let mut out = String::new();
    for function in table.list_operations() {
        let selector = function
            .selector()
            .map(|selector| to_hex_prefixed(&selector))
            .unwrap_or_else(|| format!("({})", function.kind));
        let _ = writeln!(out, "{}  {}", selector, function.signature());
    }
    for event in table.list_notifications() {
        let topic = event
            .topic()
            .map(|topic| to_hex_prefixed(&topic))
            .unwrap_or_else(|| "(anonymous)".to_string());
        let _ = writeln!(out, "{}  {}", topic, event.signature());
    }
    out
}

pub fn validate(table: &InterfaceTable) -> String {
    format!(
        "ok: {} operations, {} notifications\n",
        table.list_operations().len(),
        table.list_notifications().len()
    )
}

pub fn dump(table: &InterfaceTable) -> Result<String> {
    Ok(table.to_json_string()? + "\n")
}

fn describe_operation(function: &FunctionEntry) -> String {
    let outputs: Vec<&str> = function.outputs().iter().map(|p| p.kind.as_str()).collect();
    let mut line = format!("{} {}", function.kind, function.signature());
    if !outputs.is_empty() {
        let _ = write!(line, " -> ({})", outputs.join(","));
    }
    let _ = write!(line, " [{}]", function.mutability());
    line
}

fn describe_notification(event: &EventEntry) -> String {
    let params: Vec<String> = event
        .inputs
        .iter()
        .map(|p| {
            if p.indexed {
                format!("{} indexed {}", p.kind, p.name)
            } else {
                format!("{} {}", p.kind, p.name)
            }
        })
        .collect();
    let mut line = format!("event {}({})", event.name, params.join(", "));
    if event.anonymous {
        line.push_str(" anonymous");
    }
    line
}

pub mod capture;
pub mod config;
pub mod drafts;
pub mod expenses;
pub mod import;
pub mod navigation;
pub mod reference;
pub mod settlement;
pub mod status;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Table, TableColumn};
use crate::domain::ExpenseItem;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "go",
    "profile",
    "requests",
    "expenses",
    "capture",
    "settlement",
    "import",
    "drafts",
    "status",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(navigation::definitions());
    commands.extend(reference::definitions());
    commands.extend(expenses::definitions());
    commands.extend(capture::definitions());
    commands.extend(settlement::definitions());
    commands.extend(import::definitions());
    commands.extend(drafts::definitions());
    commands.extend(status::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Shared expense listing used by several commands.
pub(crate) fn expense_table<'a>(
    context: &ShellContext,
    items: impl IntoIterator<Item = &'a ExpenseItem>,
    is_marked: impl Fn(&ExpenseItem) -> bool,
) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("", 1),
        TableColumn::new("ID", 10),
        TableColumn::new("Type", 14),
        TableColumn::new("Category", 14),
        TableColumn::new("Date", 10),
        TableColumn::new("Amount", 12),
        TableColumn::new("Receipt", 7),
    ]);
    for item in items {
        table.add_row(vec![
            if is_marked(item) { "*".to_string() } else { String::new() },
            item.id.clone(),
            item.label.clone(),
            item.category.display_name().to_string(),
            item.date.format("%Y-%m-%d").to_string(),
            context.amount(item.amount),
            if item.has_receipt() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}

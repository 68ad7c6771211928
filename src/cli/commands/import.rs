use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{ImportTab, TypeFilter};
use crate::domain::ExpenseCategory;

use super::expense_table;

const USAGE: &str = "import [open|show|tab <expenses|drafts>|filter <all|category>|toggle <id>...|draft <number>...|all|confirm|cancel]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "import",
        "Pick recorded expenses or drafts for the settlement",
        USAGE,
        cmd_import,
    )]
}

fn cmd_import(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    if sub.as_deref() == Some("open") {
        context.import.open();
        render_dialog(context);
        return Ok(());
    }
    if !context.import.is_open() {
        return Err(CommandError::Message(
            "Import dialog is not open. Use `import open`.".into(),
        ));
    }
    context.import.sync_with(context.store.expenses());

    match sub.as_deref() {
        None | Some("show") => {
            render_dialog(context);
            Ok(())
        }
        Some("tab") => {
            let tab = match args.get(1).map(|value| value.to_lowercase()).as_deref() {
                Some("expenses") => ImportTab::Expenses,
                Some("drafts") => ImportTab::Drafts,
                _ => return Err(CommandError::usage("import tab <expenses|drafts>")),
            };
            context.import.set_tab(tab);
            render_dialog(context);
            Ok(())
        }
        Some("filter") => {
            let raw = args
                .get(1..)
                .filter(|rest| !rest.is_empty())
                .map(|rest| rest.join(" "))
                .ok_or_else(|| CommandError::usage("import filter <all|category>"))?;
            context.import.set_filter(parse_filter(&raw)?);
            render_dialog(context);
            Ok(())
        }
        Some("toggle") => {
            let ids = args.get(1..).unwrap_or_default();
            if ids.is_empty() {
                return Err(CommandError::usage("import toggle <id>..."));
            }
            context
                .import
                .toggle_expenses(ids, context.store.expenses())?;
            io::print_info(format!("Toggled {}.", ids.join(", ")));
            print_selection(context);
            Ok(())
        }
        Some("draft") => {
            let numbers = args.get(1..).unwrap_or_default();
            if numbers.is_empty() {
                return Err(CommandError::usage("import draft <number>..."));
            }
            for number in numbers {
                let draft = context.store.find_draft_any_case(number).ok_or_else(|| {
                    CommandError::Message(format!("No draft for `{}`.", number))
                })?;
                let canonical = draft.request_number.clone();
                context.import.toggle_draft(&canonical);
            }
            io::print_info(format!(
                "Selected drafts: {}",
                context.import.selected_draft_numbers().join(", ")
            ));
            Ok(())
        }
        Some("all") => {
            let added = context.import.select_all(context.store.expenses())?;
            io::print_info(format!("Selected {} more expense(s).", added));
            print_selection(context);
            Ok(())
        }
        Some("confirm") => {
            let imported = context.import.confirm(
                context.store.expenses(),
                context.store.draft_settlements(),
            );
            let found = imported.len();
            let added = context.editor.import(imported);
            io::print_success(format!(
                "Imported {} expense(s) into the settlement.",
                added
            ));
            if added < found {
                io::print_info(format!("{} already present, skipped.", found - added));
            }
            Ok(())
        }
        Some("cancel") => {
            context.import.cancel();
            io::print_info("Import cancelled.");
            Ok(())
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

fn parse_filter(raw: &str) -> Result<TypeFilter, CommandError> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(TypeFilter::All);
    }
    raw.parse::<ExpenseCategory>()
        .map(TypeFilter::Only)
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

fn render_dialog(context: &ShellContext) {
    let dialog = &context.import;
    output_section(format!("Import ({}, filter: {})", dialog.tab(), dialog.filter()));
    match dialog.tab() {
        ImportTab::Expenses => {
            let visible = dialog.visible_expenses(context.store.expenses());
            if visible.is_empty() {
                io::print_info("No expenses match the filter.");
            } else {
                expense_table(context, visible, |item| dialog.is_expense_selected(&item.id))
                    .render();
            }
            print_selection(context);
        }
        ImportTab::Drafts => {
            let mut table = Table::new(vec![
                TableColumn::new("", 1),
                TableColumn::new("Request", 12),
                TableColumn::new("Expenses", 8),
                TableColumn::new("Total", 12),
                TableColumn::new("Saved", 10),
            ]);
            for draft in context.store.draft_settlements() {
                let marked = dialog
                    .selected_draft_numbers()
                    .iter()
                    .any(|number| *number == draft.request_number);
                table.add_row(vec![
                    if marked { "*".to_string() } else { String::new() },
                    draft.request_number.clone(),
                    draft.expense_count().to_string(),
                    context.amount(draft.total_claimed),
                    draft.review_date.to_string(),
                ]);
            }
            if table.is_empty() {
                io::print_info("No drafts saved.");
            } else {
                table.render();
            }
        }
    }
}

fn print_selection(context: &ShellContext) {
    let dialog = &context.import;
    let count = dialog.selected_expense_ids().len();
    let category = dialog
        .selected_category(context.store.expenses())
        .map(|category| category.display_name())
        .unwrap_or("none");
    io::print_info(format!(
        "Selected: {} expense(s), type {}, total {}",
        count,
        category,
        context.amount(dialog.selection_total(context.store.expenses()))
    ));
}

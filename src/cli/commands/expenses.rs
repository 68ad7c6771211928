use chrono::NaiveDate;

use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::capture_service::parse_amount;
use crate::domain::{Displayable, ExpenseItem};
use crate::store::{Action, DispatchOutcome};

use super::expense_table;

const USAGE: &str = "expenses [list|show <id>|delete <id>|edit <id> <type|amount|date|remarks> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expenses",
        "List and maintain recorded expenses",
        USAGE,
        cmd_expenses,
    )]
}

fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    match sub.as_deref() {
        None | Some("list") => {
            output_section("Expenses");
            if context.store.expenses().is_empty() {
                io::print_info("No expenses recorded.");
                return Ok(());
            }
            expense_table(context, context.store.expenses(), |_| false).render();
            Ok(())
        }
        Some("show") => {
            let id = args.get(1).ok_or_else(|| CommandError::usage("expenses show <id>"))?;
            let item = find(context, id)?;
            print_detail(context, item);
            Ok(())
        }
        Some("delete") => {
            let id = args.get(1).ok_or_else(|| CommandError::usage("expenses delete <id>"))?;
            let label = find(context, id)?.display_label();
            context.store.dispatch(Action::DeleteExpense(id.to_string()));
            io::print_success(format!("Deleted {}.", label));
            Ok(())
        }
        Some("edit") => {
            if args.len() < 4 {
                return Err(CommandError::usage(
                    "expenses edit <id> <type|amount|date|remarks> <value>",
                ));
            }
            let id = args[1];
            let value = args[3..].join(" ");
            let updated = apply_edit(find(context, id)?.clone(), args[2], &value)?;
            match context.store.replace_expense(id, updated) {
                DispatchOutcome::Applied => io::print_success(format!("Expense {} updated.", id)),
                DispatchOutcome::Unchanged => io::print_info("Nothing changed."),
            }
            Ok(())
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

fn find<'a>(context: &'a ShellContext, id: &str) -> Result<&'a ExpenseItem, CommandError> {
    context
        .store
        .find_expense(id)
        .ok_or_else(|| CommandError::Message(format!("No expense with id `{}`.", id)))
}

/// Builds the replacement record; the category follows a changed type label.
fn apply_edit(item: ExpenseItem, field: &str, value: &str) -> Result<ExpenseItem, CommandError> {
    let updated = match field.to_lowercase().as_str() {
        "type" => {
            let label = value.trim();
            if label.is_empty() {
                return Err(CommandError::InvalidArguments("type cannot be empty".into()));
            }
            let mut rebuilt = ExpenseItem::new(item.id.clone(), label, item.amount, item.date)
                .with_remarks(item.remarks.clone());
            rebuilt.image = item.image.clone();
            rebuilt.travel_request_number = item.travel_request_number.clone();
            rebuilt
        }
        "amount" => ExpenseItem {
            amount: parse_amount(value)?,
            ..item
        },
        "date" => ExpenseItem {
            date: NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                CommandError::InvalidArguments("invalid date (use YYYY-MM-DD)".into())
            })?,
            ..item
        },
        "remarks" => item.with_remarks(value),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown field `{}`",
                other
            )))
        }
    };
    Ok(updated)
}

pub(crate) fn print_detail(context: &ShellContext, item: &ExpenseItem) {
    output_section(format!("Expense {}", item.id));
    io::print_info(format!("  Type     : {}", item.label));
    io::print_info(format!("  Category : {}", item.category.display_name()));
    io::print_info(format!("  Amount   : {}", context.amount(item.amount)));
    io::print_info(format!("  Date     : {}", item.date));
    if !item.remarks.is_empty() {
        io::print_info(format!("  Remarks  : {}", item.remarks));
    }
    if let Some(image) = &item.image {
        io::print_info(format!("  Receipt  : {}", image));
    }
    if let Some(request) = &item.travel_request_number {
        io::print_info(format!("  Request  : {}", request));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseCategory;

    fn item() -> ExpenseItem {
        ExpenseItem::new("7", "taxi", 300.0, NaiveDate::from_ymd_opt(2025, 1, 21).unwrap())
            .with_remarks("airport")
    }

    #[test]
    fn editing_type_reclassifies() {
        let updated = apply_edit(item(), "type", "hotel stay").unwrap();
        assert_eq!(updated.category, ExpenseCategory::Lodging);
        assert_eq!(updated.remarks, "airport");
        assert_eq!(updated.id, "7");
    }

    #[test]
    fn editing_amount_validates_input() {
        assert_eq!(apply_edit(item(), "amount", "450").unwrap().amount, 450.0);
        assert!(apply_edit(item(), "amount", "-2").is_err());
        assert!(apply_edit(item(), "colour", "red").is_err());
    }
}

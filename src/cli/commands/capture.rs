use chrono::NaiveDate;

use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::views::View;
use crate::core::services::capture_service::parse_amount;
use crate::domain::ExpenseCategory;

use super::{expense_table, navigation};

const USAGE: &str = "capture [show|type <label>|amount <value>|date <YYYY-MM-DD>|remarks <text>|request <number|none>|scan|attach <file>|clear-receipt|save|list|delete <id>|sync]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "capture",
        "Scan receipts and record expenses",
        USAGE,
        cmd_capture,
    )]
}

fn cmd_capture(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    let rest = args.get(1..).unwrap_or_default().join(" ");
    match sub.as_deref() {
        None | Some("show") => {
            render_form(context);
            Ok(())
        }
        Some("type") => {
            require(&rest, "capture type <label>")?;
            context.capture.set_label(rest.trim());
            io::print_info(format!(
                "Type set to `{}` ({}).",
                rest.trim(),
                ExpenseCategory::resolve(&rest).display_name()
            ));
            Ok(())
        }
        Some("amount") => {
            require(&rest, "capture amount <value>")?;
            context.capture.set_amount(parse_amount(&rest)?)?;
            io::print_info(format!("Amount set to {}.", context.amount(context.capture.current().amount)));
            Ok(())
        }
        Some("date") => {
            require(&rest, "capture date <YYYY-MM-DD>")?;
            let date = NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d").map_err(|_| {
                CommandError::InvalidArguments("invalid date (use YYYY-MM-DD)".into())
            })?;
            context.capture.set_date(date);
            io::print_info(format!("Date set to {}.", date));
            Ok(())
        }
        Some("remarks") => {
            context.capture.set_remarks(rest.trim());
            io::print_info("Remarks updated.");
            Ok(())
        }
        Some("request") => {
            require(&rest, "capture request <number|none>")?;
            if rest.trim().eq_ignore_ascii_case("none") {
                context.capture.set_travel_request(None);
                io::print_info("Travel request cleared.");
                return Ok(());
            }
            let number = context
                .catalog
                .find(&rest)
                .map(|request| request.number.clone())
                .ok_or_else(|| {
                    CommandError::Message(format!("Unknown travel request `{}`.", rest.trim()))
                })?;
            io::print_info(format!("Linked to {}.", number));
            context.capture.set_travel_request(Some(number));
            Ok(())
        }
        Some("scan") => {
            context.capture.capture_receipt(context.clock.as_ref());
            io::print_success("Receipt captured and details extracted.");
            render_form(context);
            Ok(())
        }
        Some("attach") => {
            require(&rest, "capture attach <file>")?;
            context.capture.attach_receipt(rest.trim())?;
            io::print_success("Receipt attached.");
            Ok(())
        }
        Some("clear-receipt") => {
            context.capture.clear_receipt();
            io::print_info("Receipt removed.");
            Ok(())
        }
        Some("save") => {
            let item = context
                .capture
                .save(context.ids.as_ref(), context.clock.as_ref())?;
            io::print_success(format!(
                "Expense {} saved: {} {}.",
                item.id,
                item.label,
                context.amount(item.amount)
            ));
            Ok(())
        }
        Some("list") => {
            if context.capture.saved().is_empty() {
                io::print_info("No expenses saved yet.");
                return Ok(());
            }
            expense_table(context, context.capture.saved(), |_| false).render();
            Ok(())
        }
        Some("delete") => {
            require(&rest, "capture delete <id>")?;
            let removed = context.capture.delete(rest.trim())?;
            io::print_success(format!("Expense {} removed.", removed.id));
            Ok(())
        }
        Some("sync") => {
            let count = context
                .capture
                .sync(&mut context.store, &mut context.scratch)?;
            io::print_success(format!("Synced {} expense(s).", count));
            navigation::open(context, View::TravelSettlement)
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

fn require(value: &str, usage: &str) -> CommandResult {
    if value.trim().is_empty() {
        return Err(CommandError::usage(usage));
    }
    Ok(())
}

pub(crate) fn render_form(context: &ShellContext) {
    let draft = context.capture.current();
    let blank = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };
    io::print_info(format!("  Type     : {}", blank(&draft.label)));
    io::print_info(format!("  Amount   : {}", context.amount(draft.amount)));
    io::print_info(format!(
        "  Date     : {}",
        draft
            .date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "today".into())
    ));
    io::print_info(format!("  Remarks  : {}", blank(&draft.remarks)));
    io::print_info(format!(
        "  Receipt  : {}",
        draft.image.as_deref().unwrap_or("-")
    ));
    io::print_info(format!(
        "  Request  : {}",
        draft.travel_request_number.as_deref().unwrap_or("-")
    ));
    io::print_info(format!(
        "  Saved expenses waiting for sync: {}",
        context.capture.saved().len()
    ));
}

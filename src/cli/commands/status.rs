use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::StatusService;

use super::settlement;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "status",
        "Track submitted settlements and drafts",
        "status [number]",
        cmd_status,
    )]
}

fn cmd_status(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(number) = args.first() else {
        render_rows(context);
        return Ok(());
    };

    let settlement = StatusService::find(&context.store, number)
        .ok_or_else(|| CommandError::Message(format!("No settlement found for `{}`.", number)))?;

    output_section(format!("Settlement {}", settlement.request_number));
    io::print_info(format!("  Status          : {}", settlement.status));
    io::print_info(format!(
        "  Total claimed   : {}",
        context.amount(settlement.total_claimed)
    ));
    io::print_info(format!(
        "  Total approved  : {}",
        context.amount(settlement.total_approved)
    ));
    io::print_info(format!(
        "  Total paid      : {}",
        context.amount(settlement.total_paid)
    ));
    io::print_info(format!("  Finance reviewer: {}", settlement.finance_reviewer));
    let summary = StatusService::summary(settlement, context.config.allocated_advance);
    settlement::print_balance(context, &summary);
    io::print_info(format!("  Review date     : {}", settlement.review_date));
    io::print_info("  Timeline:");
    for step in StatusService::timeline(settlement) {
        let mark = if step.completed { "[x]" } else { "[ ]" };
        io::print_info(format!("    {} {}", mark, step.stage));
    }
    Ok(())
}

pub(crate) fn render_rows(context: &ShellContext) {
    let rows = StatusService::rows(&context.store);
    if rows.is_empty() {
        io::print_info("No settlements yet.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::new("Request", 12),
        TableColumn::new("Status", 12),
        TableColumn::new("Items", 5),
        TableColumn::new("Claimed", 12),
        TableColumn::new("Approved", 12),
        TableColumn::new("Reviewer", 14),
    ]);
    for row in rows {
        table.add_row(vec![
            row.request_number,
            row.status.to_string(),
            row.expense_count.to_string(),
            context.amount(row.total_claimed),
            context.amount(row.total_approved),
            row.finance_reviewer,
        ]);
    }
    table.render();
}

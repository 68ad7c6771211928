use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::views::View;
use crate::core::services::EditorState;
use crate::domain::{common::total_of, SettlementSummary};

use super::{expense_table, navigation};

const USAGE: &str =
    "settlement [show|request <number>|remove <id>|load-staged|summary|draft|submit|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "settlement",
        "Prepare, save, and submit the settlement in progress",
        USAGE,
        cmd_settlement,
    )]
}

fn cmd_settlement(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    match sub.as_deref() {
        None | Some("show") => {
            render_editor(context);
            Ok(())
        }
        Some("request") => {
            let raw = args
                .get(1)
                .ok_or_else(|| CommandError::usage("settlement request <number>"))?;
            let request = context.catalog.find(raw).ok_or_else(|| {
                CommandError::Message(format!("Unknown travel request `{}`.", raw))
            })?;
            let (number, label) = (request.number.clone(), request.label());
            context.editor.select_travel_request(&number);
            io::print_success(format!("Travel request set: {}", label));
            Ok(())
        }
        Some("remove") => {
            let id = args
                .get(1)
                .ok_or_else(|| CommandError::usage("settlement remove <id>"))?;
            let removed = context.editor.remove_expense(id)?;
            io::print_success(format!("Removed {} from the settlement.", removed.id));
            Ok(())
        }
        Some("load-staged") => {
            let count = context.editor.load_staged(&mut context.scratch)?;
            io::print_success(format!("Imported {} captured expense(s).", count));
            Ok(())
        }
        Some("summary") => {
            print_summary(context);
            Ok(())
        }
        Some("draft") => {
            let draft = context
                .editor
                .save_draft(&mut context.store, context.clock.as_ref())?;
            io::print_success(format!(
                "Draft {} saved with {} expense(s), total {}.",
                draft.request_number,
                draft.expense_count(),
                context.amount(draft.total_claimed)
            ));
            Ok(())
        }
        Some("submit") => {
            if !context.confirm("Submit this settlement for review?")? {
                io::print_info("Submission cancelled.");
                return Ok(());
            }
            let settlement = context
                .editor
                .submit(&mut context.store, context.clock.as_ref())?;
            context.last_submission = Some(settlement);
            navigation::open(context, View::SettlementSuccess)
        }
        Some("reset") => {
            context.editor.reset();
            io::print_info("Settlement cleared.");
            Ok(())
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

pub(crate) fn render_editor(context: &ShellContext) {
    let editor = &context.editor;
    let request = editor
        .travel_request()
        .map(|number| {
            context
                .catalog
                .find(number)
                .map(|request| request.label())
                .unwrap_or_else(|| number.to_string())
        })
        .unwrap_or_else(|| "not selected".into());
    io::print_info(format!("Travel request: {}", request));
    io::print_info(format!("State: {}", state_label(editor.state())));

    if editor.selected_expenses().is_empty() {
        io::print_info("No expenses added. Use `import open` or `capture` to add some.");
    } else {
        for (category, items) in editor.grouped() {
            let subtotal = total_of(items.iter().map(|item| &item.amount));
            io::print_info(format!(
                "{} ({} item(s), {})",
                category.display_name(),
                items.len(),
                context.amount(subtotal)
            ));
            expense_table(context, items, |_| false).render();
        }
    }
    print_summary(context);
}

fn print_summary(context: &ShellContext) {
    let summary = context.editor.summary(context.config.allocated_advance);
    print_balance(context, &summary);
}

/// Claimed, approved (when known), advance and the resulting balance.
pub(crate) fn print_balance(context: &ShellContext, summary: &SettlementSummary) {
    io::print_info(format!(
        "  Total claimed  : {}",
        context.amount(summary.total_claimed)
    ));
    if let Some(approved) = summary.total_approved {
        io::print_info(format!("  Total approved : {}", context.amount(approved)));
    }
    io::print_info(format!(
        "  Allocated      : {}",
        context.amount(summary.allocated)
    ));
    io::print_info(format!(
        "  {:<15}: {} ({})",
        summary.balance_label(),
        context.amount(summary.balance().abs()),
        context.config.currency_code
    ));
}

fn state_label(state: EditorState) -> &'static str {
    match state {
        EditorState::Empty => "empty",
        EditorState::Editing => "editing",
        EditorState::SavedAsDraft => "saved as draft",
        EditorState::Submitted => "submitted",
    }
}

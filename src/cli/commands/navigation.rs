use crate::cli::errors::CommandResult;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::views::View;

use super::{capture, settlement, status};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "go",
        "Open a page by path, or show the current one",
        "go [/|/travel-settlement|/expense-capture|/settlement-success|/settlement-status]",
        cmd_go,
    )]
}

fn cmd_go(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(path) = args.first() else {
        io::print_info(format!(
            "Current page: {} ({})",
            context.view,
            context.view.path()
        ));
        for view in View::ROUTES {
            io::print_info(format!("  {:<22} {}", view.path(), view.title()));
        }
        return Ok(());
    };

    let view = View::resolve(path);
    if view == View::NotFound {
        context.navigate(view);
        io::print_warning(format!("Page not found: {}", path));
        io::print_hint("Use `go /` to return home.");
        return Ok(());
    }
    open(context, view)
}

/// Switches to `view` and renders it.
pub(crate) fn open(context: &mut ShellContext, view: View) -> CommandResult {
    context.navigate(view);
    render(context)
}

pub(crate) fn render(context: &mut ShellContext) -> CommandResult {
    output_section(context.view.title());
    match context.view {
        View::Home => render_home(context),
        View::TravelSettlement => {
            if context.scratch.staged_count() > 0 {
                let count = context.editor.load_staged(&mut context.scratch)?;
                io::print_success(format!("Imported {} captured expense(s).", count));
            }
            settlement::render_editor(context);
        }
        View::ExpenseCapture => capture::render_form(context),
        View::SettlementSuccess => render_success(context),
        View::SettlementStatus => status::render_rows(context),
        View::NotFound => io::print_warning("Nothing to show here."),
    }
    Ok(())
}

fn render_home(context: &ShellContext) {
    io::print_info(format!(
        "Welcome, {} ({}).",
        context.profile.name, context.profile.code
    ));
    io::print_info(format!(
        "  Settlements under review: {}",
        context.store.settlements().len()
    ));
    io::print_info(format!(
        "  Drafts waiting          : {}",
        context.store.draft_settlements().len()
    ));
    io::print_info("  `go /travel-settlement` to prepare a settlement");
    io::print_info("  `go /expense-capture` to scan receipts");
    io::print_info("  `go /settlement-status` to track submissions");
}

fn render_success(context: &ShellContext) {
    match &context.last_submission {
        Some(settlement) => {
            io::print_success(format!(
                "Settlement {} submitted for review.",
                settlement.request_number
            ));
            io::print_info(format!(
                "  {} expense(s), total claimed {}",
                settlement.expense_count(),
                context.amount(settlement.total_claimed)
            ));
            io::print_info("Track it with `status` or `go /settlement-status`.");
        }
        None => io::print_warning("No settlement submitted in this session."),
    }
}

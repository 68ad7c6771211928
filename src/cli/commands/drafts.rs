use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::domain::Displayable;
use crate::store::{Action, DispatchOutcome};

use super::expense_table;

const USAGE: &str = "drafts [list|show <number>|promote <number>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "drafts",
        "Review saved drafts and send them for review",
        USAGE,
        cmd_drafts,
    )]
}

fn cmd_drafts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    match sub.as_deref() {
        None | Some("list") => {
            output_section("Drafts");
            let drafts = context.store.draft_settlements();
            if drafts.is_empty() {
                io::print_info("No drafts saved.");
            }
            for draft in drafts {
                io::print_info(format!(
                    "  {:<22} {} expense(s)  {}  saved {}",
                    draft.display_label(),
                    draft.expense_count(),
                    context.amount(draft.total_claimed),
                    draft.review_date
                ));
            }
            Ok(())
        }
        Some("show") => {
            let number = args
                .get(1)
                .ok_or_else(|| CommandError::usage("drafts show <number>"))?;
            let draft = context
                .store
                .find_draft_any_case(number)
                .ok_or_else(|| CommandError::Message(format!("No draft for `{}`.", number)))?;
            output_section(format!("Draft {}", draft.request_number));
            expense_table(context, &draft.expenses, |_| false).render();
            io::print_info(format!(
                "Total claimed: {}",
                context.amount(draft.total_claimed)
            ));
            if draft.has_drifted() {
                io::print_warning(format!(
                    "Expenses now add up to {}; the stored total predates later edits.",
                    context.amount(draft.expenses_total())
                ));
            }
            Ok(())
        }
        Some("promote") => {
            let number = args
                .get(1)
                .ok_or_else(|| CommandError::usage("drafts promote <number>"))?;
            let canonical = context
                .store
                .find_draft_any_case(number)
                .map(|draft| draft.request_number.clone())
                .unwrap_or_else(|| number.trim().to_string());
            match context.store.dispatch(Action::PromoteDraft(canonical.clone())) {
                DispatchOutcome::Applied => {
                    io::print_success(format!("Draft {} sent for review.", canonical))
                }
                DispatchOutcome::Unchanged => {
                    io::print_warning(format!("No draft for `{}`; nothing promoted.", number))
                }
            }
            Ok(())
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

use std::{env, path::PathBuf};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::cli::commands;
use crate::cli::errors::{CliError, CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::views::View;
use crate::config::{Config, ConfigManager, IdStrategy};
use crate::core::{
    clock::{Clock, FixedClock, SystemClock},
    ids::IdGenerator,
    scratch::ScratchSpace,
    services::{CaptureForm, ImportDialog, SettlementEditor},
    utils,
};
use crate::domain::{format_amount, EmployeeProfile, SettlementAggregate, TravelRequestCatalog};
use crate::store::Store;

/// Pins "today" for the session, in `YYYY-MM-DD` form.
pub const TODAY_ENV: &str = "TRAVEL_SETTLEMENT_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Everything one shell session owns. The store lives here and is handed to
/// flows by `&mut`.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store: Store,
    pub editor: SettlementEditor,
    pub import: ImportDialog,
    pub capture: CaptureForm,
    pub scratch: ScratchSpace,
    pub catalog: TravelRequestCatalog,
    pub profile: EmployeeProfile,
    pub clock: Box<dyn Clock>,
    pub ids: Box<dyn IdGenerator>,
    id_strategy: IdStrategy,
    pub view: View,
    pub last_submission: Option<SettlementAggregate>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let clock = clock_from_env()?;
        Self::with_base_dir(mode, utils::app_data_dir(), clock)
    }

    pub fn with_base_dir(
        mode: CliMode,
        base: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        apply_output(&config);

        let store = Store::seeded(clock.today());
        let ids = config
            .id_strategy
            .generator(store.expenses().iter().map(|item| item.id.as_str()));
        tracing::debug!(
            expenses = store.expenses().len(),
            settlements = store.settlements().len(),
            drafts = store.draft_settlements().len(),
            "store seeded"
        );

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            ids,
            id_strategy: config.id_strategy,
            config,
            store,
            editor: SettlementEditor::new(),
            import: ImportDialog::new(),
            capture: CaptureForm::new(),
            scratch: ScratchSpace::new(),
            catalog: TravelRequestCatalog::sample(),
            profile: EmployeeProfile::sample(),
            clock,
            view: View::Home,
            last_submission: None,
            last_command: None,
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        format!("travel-settlement {}> ", self.view.path())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    /// Interactive confirmation; scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, prompt, true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    pub(crate) fn amount(&self, value: f64) -> String {
        format_amount(&self.config.currency_symbol, value)
    }

    pub(crate) fn navigate(&mut self, view: View) {
        tracing::debug!(from = self.view.path(), to = view.path(), "navigate");
        self.view = view;
    }

    pub(crate) fn save_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        apply_output(&self.config);
        if self.config.id_strategy != self.id_strategy {
            let ids = self.config.id_strategy.generator(self.expense_ids());
            self.ids = ids;
            self.id_strategy = self.config.id_strategy;
            tracing::info!(strategy = %self.id_strategy, "id strategy switched");
        }
        Ok(())
    }

    /// Every expense id the session can still see.
    fn expense_ids(&self) -> Vec<&str> {
        let store = &self.store;
        store
            .expenses()
            .iter()
            .chain(store.settlements().iter().flat_map(|s| s.expenses.iter()))
            .chain(store.draft_settlements().iter().flat_map(|s| s.expenses.iter()))
            .chain(self.capture.saved())
            .chain(self.editor.selected_expenses())
            .map(|item| item.id.as_str())
            .collect()
    }
}

fn apply_output(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_output: config.plain_output(),
    });
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| CliError::Input(format!("{TODAY_ENV} must be YYYY-MM-DD, got `{raw}`")))?;
            Ok(Box::new(FixedClock::new(date)))
        }
        _ => Ok(Box::new(SystemClock)),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::cli::shell::handle_line;
    use crate::core::errors::SettlementError;

    fn context(base: PathBuf) -> ShellContext {
        let today = NaiveDate::from_ymd_opt(2025, 2, 1).expect("date");
        ShellContext::with_base_dir(CliMode::Script, base, Box::new(FixedClock::new(today)))
            .expect("context")
    }

    fn run(context: &mut ShellContext, line: &str) -> LoopControl {
        handle_line(context, line).expect(line)
    }

    #[test]
    fn import_then_submit_reaches_confirmation_view() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        for line in [
            "settlement request tr-2025-001",
            "import open",
            "import filter travel",
            "import all",
            "import confirm",
            "settlement submit",
        ] {
            assert_eq!(run(&mut ctx, line), LoopControl::Continue);
        }
        assert_eq!(ctx.view, View::SettlementSuccess);
        let submitted = ctx.store.find_settlement("TR-2025-001").expect("filed");
        assert_eq!(submitted.total_claimed, 4500.0);
        assert!(ctx.editor.selected_expenses().is_empty());
        assert!(ctx.last_submission.is_some());
    }

    #[test]
    fn draft_without_request_is_reported_not_fatal() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        let err = handle_line(&mut ctx, "settlement draft").expect_err("guarded");
        assert!(matches!(
            err,
            CommandError::Settlement(SettlementError::MissingTravelRequest)
        ));
        assert_eq!(ctx.store.draft_settlements().len(), 1);
        assert!(ctx.report_error(err).is_ok());
    }

    #[test]
    fn unknown_commands_and_exit() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        assert_eq!(run(&mut ctx, "statsu"), LoopControl::Continue);
        assert_eq!(ctx.last_command.as_deref(), Some("statsu"));
        assert_eq!(run(&mut ctx, "exit"), LoopControl::Exit);
        assert!(!ctx.running);
    }

    fn capture(ctx: &mut ShellContext, label: &str) {
        for line in [
            format!("capture type \"{label}\""),
            "capture scan".to_string(),
            "capture save".to_string(),
            "capture sync".to_string(),
        ] {
            run(ctx, &line);
        }
    }

    fn store_ids(ctx: &ShellContext) -> Vec<String> {
        ctx.store.expenses().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn config_changes_do_not_reissue_ids() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        run(&mut ctx, "config set id_strategy sequential");
        capture(&mut ctx, "meals");
        run(&mut ctx, "config set allocated_advance 20000");
        capture(&mut ctx, "taxi");

        assert_eq!(store_ids(&ctx), vec!["1", "2", "3", "exp-1", "exp-2"]);
        let selected: Vec<&str> = ctx
            .editor
            .selected_expenses()
            .iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(selected, vec!["meals", "taxi"]);
    }

    #[test]
    fn switching_back_to_sequential_resumes_the_counter() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        run(&mut ctx, "config set id_strategy sequential");
        capture(&mut ctx, "meals");
        run(&mut ctx, "config set id_strategy uuid");
        run(&mut ctx, "config reset");
        run(&mut ctx, "config set id_strategy sequential");
        capture(&mut ctx, "taxi");
        assert_eq!(store_ids(&ctx)[3..], ["exp-1".to_string(), "exp-2".to_string()]);
    }

    #[test]
    fn deleting_a_selected_expense_frees_the_import_dialog() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        for line in ["import open", "import toggle 1", "expenses delete 1", "import toggle 2"] {
            run(&mut ctx, line);
        }
        assert_eq!(ctx.import.selected_expense_ids(), ["2".to_string()]);

        let err = handle_line(&mut ctx, "import toggle 3").expect_err("meals after lodging");
        assert!(matches!(
            err,
            CommandError::Settlement(SettlementError::MixedCategories { .. })
        ));
        assert_eq!(ctx.import.selected_expense_ids(), ["2".to_string()]);
    }

    #[test]
    fn drafts_promote_accepts_any_case() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        run(&mut ctx, "drafts promote tr-2025-003");
        assert!(ctx.store.draft_settlements().is_empty());
        assert!(ctx.store.find_settlement("TR-2025-003").is_some());
    }

    #[test]
    fn capture_sync_lands_in_settlement_editor() {
        let dir = tempdir().expect("tempdir");
        let mut ctx = context(dir.path().to_path_buf());
        ctx.config.id_strategy = crate::config::IdStrategy::Sequential;
        ctx.save_config().expect("save");
        for line in ["capture type \"Hotel stay\"", "capture scan", "capture save", "capture sync"] {
            run(&mut ctx, line);
        }
        assert_eq!(ctx.view, View::TravelSettlement);
        assert_eq!(ctx.scratch.staged_count(), 0);
        let selected = ctx.editor.selected_expenses();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "exp-1");
        assert_eq!(selected[0].amount, 1250.0);
        assert!(ctx.store.find_expense("exp-1").is_some());
    }
}

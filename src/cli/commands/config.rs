use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::model::CONFIG_KEYS;

const USAGE: &str = "config [show|get <key>|set <key> <value>|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    match sub.as_deref() {
        None | Some("show") => show(context),
        Some("get") => {
            let key = args.get(1).ok_or_else(|| CommandError::usage("config get <key>"))?;
            io::print_info(format!("{} = {}", key, context.config.get(key)?));
            Ok(())
        }
        Some("set") => {
            if args.len() < 3 {
                return Err(CommandError::usage("config set <key> <value>"));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            context.config.set(key, &value)?;
            context.save_config()?;
            io::print_success(format!("{} updated.", key));
            Ok(())
        }
        Some("reset") => {
            context.config = Default::default();
            context.save_config()?;
            io::print_success("Preferences reset to defaults.");
            Ok(())
        }
        Some(_) => Err(CommandError::usage(USAGE)),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output_section("Preferences");
    for key in CONFIG_KEYS {
        io::print_info(format!("  {:<18} {}", key, context.config.get(key)?));
    }
    io::print_info(format!(
        "  Stored at: {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

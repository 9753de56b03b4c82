use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View or change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut updated = context.config.clone();
            updated.set(key, value.join(" ").trim())?;
            context.update_config(updated)?;
            output::success(format!("Updated `{}`.", key));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config set <{}> <value>",
            CONFIG_KEYS.join("|")
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("  {:<20} {}", key, value));
    }
    output::info(format!(
        "  Stored at: {}",
        context.config_manager.path().display()
    ));
}

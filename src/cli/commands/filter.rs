use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::Filter;

const USAGE: &str = "usage: filter [amount <value>|category <name>|clear]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "filter",
        "Highlight expenses matching an amount or category",
        "filter [amount <value>|category <name>|clear]",
        cmd_filter,
    )]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((kind, rest)) = args.split_first() else {
        return show_filter(context);
    };

    let filter = match (kind.to_ascii_lowercase().as_str(), rest) {
        ("clear", []) => {
            context.controller.clear_filter();
            output::success("Filter cleared.");
            context.print_table();
            return Ok(());
        }
        ("amount", [value]) => {
            let target = value.trim().parse::<f64>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{}` is not a valid amount", value))
            })?;
            Filter::amount(target)
        }
        ("category", words) if !words.is_empty() => Filter::category(words.join(" ")),
        _ => return Err(CommandError::InvalidArguments(USAGE.into())),
    };

    context.controller.set_filter(filter);
    let rows = context.controller.apply_filter();
    report_matches(context, rows.len());
    context.print_table();
    Ok(())
}

fn show_filter(context: &mut ShellContext) -> CommandResult {
    if context.controller.filter().is_none() {
        output::info("No filter active.");
        return Ok(());
    }
    let rows = context.controller.apply_filter();
    report_matches(context, rows.len());
    context.print_table();
    Ok(())
}

fn report_matches(context: &ShellContext, count: usize) {
    if let Some(filter) = context.controller.filter() {
        output::info(format!(
            "Filter `{}` matches {} transaction(s).",
            filter, count
        ));
    }
}

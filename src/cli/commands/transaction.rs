use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::errors::LedgerError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a new expense",
            "add <amount> <category>",
            cmd_add,
        ),
        CommandEntry::new(
            "list",
            "Show every recorded expense",
            "list [--json]",
            cmd_list,
        ),
        CommandEntry::new("total", "Show the total of all expenses", "total", cmd_total),
        CommandEntry::new(
            "undo",
            "Remove the expense shown at a table row",
            "undo <row>",
            cmd_undo,
        ),
        CommandEntry::new("remove", "Alias for `undo`", "remove <row>", cmd_undo),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((amount, category)) = args.split_first().filter(|(_, rest)| !rest.is_empty()) else {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> <category>".into(),
        ));
    };
    let amount = parse_amount(amount)?;
    let category = category.join(" ");

    context.controller.try_add_transaction(amount, &category)?;
    output::success(format!(
        "Added {} in `{}`.",
        context.format_amount(amount),
        category
    ));
    context.print_table();
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            context.print_table();
            Ok(())
        }
        ["--json"] => {
            let json = serde_json::to_string_pretty(context.controller.ledger().transactions())?;
            output::block(json);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: list [--json]".into())),
    }
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.controller.ledger();
    output::info(format!(
        "Total: {} across {} transaction(s)",
        context.format_amount(ledger.total_cost()),
        ledger.len()
    ));
    Ok(())
}

fn cmd_undo(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [row] = args else {
        return Err(CommandError::InvalidArguments("usage: undo <row>".into()));
    };
    let row = parse_row(row)?;
    let removed = context
        .controller
        .remove_transaction(row - 1)
        .map_err(|err| match err {
            LedgerError::RowOutOfRange { len, .. } => CommandError::InvalidArguments(format!(
                "row {} does not exist (ledger holds {} transaction(s))",
                row, len
            )),
            other => other.into(),
        })?;
    output::success(format!(
        "Removed row {} ({} in `{}`).",
        row,
        context.format_amount(removed.amount()),
        removed.category()
    ));
    context.print_table();
    Ok(())
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a valid amount", raw)))
}

/// Table rows are numbered from 1.
fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a valid row number",
            raw
        ))),
    }
}

//! Presentation of the ledger as a table with a trailing total row.

pub mod table;

use colored::Colorize;

use crate::{config::Config, ledger::Transaction};
use self::table::{Alignment, Table, TableColumn};

const CATEGORY_MAX_WIDTH: usize = 24;

/// Rendering side of the controller: receives the ledger contents after
/// every mutation and the rows to emphasise after a filter is applied.
pub trait LedgerView {
    fn refresh(&mut self, transactions: &[Transaction]);
    fn highlight_rows(&mut self, rows: &[usize]);
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Entry {
        serial: usize,
        amount: f64,
        category: String,
        timestamp: String,
    },
    Total {
        amount: f64,
    },
}

/// One row per transaction followed by the total row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    rows: Vec<TableRow>,
}

impl TableModel {
    pub fn build(transactions: &[Transaction], date_format: &str) -> Self {
        let mut rows: Vec<TableRow> = transactions
            .iter()
            .enumerate()
            .map(|(idx, txn)| TableRow::Entry {
                serial: idx + 1,
                amount: txn.amount(),
                category: txn.category().to_string(),
                timestamp: txn.timestamp_label(date_format),
            })
            .collect();
        rows.push(TableRow::Total {
            amount: transactions.iter().map(Transaction::amount).sum(),
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total(&self) -> f64 {
        match self.rows.last() {
            Some(TableRow::Total { amount }) => *amount,
            _ => 0.0,
        }
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::build(&[], "")
    }
}

/// Terminal table view of the ledger.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    model: TableModel,
    highlighted: Vec<usize>,
    currency_symbol: String,
    date_format: String,
    plain: bool,
}

impl TableView {
    pub fn new(config: &Config) -> Self {
        let mut view = Self::default();
        view.configure(config);
        view
    }

    /// Applies display settings; takes effect on the next refresh.
    pub fn configure(&mut self, config: &Config) {
        self.currency_symbol = config.currency_symbol.clone();
        self.date_format = config.date_format.clone();
        self.plain = config.plain_mode;
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn highlighted_rows(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Draws the table. Highlighted rows carry a `*` marker, coloured unless
    /// plain mode is on.
    pub fn render(&self) -> String {
        let mut table = Table::new(vec![
            TableColumn::new("", Alignment::Left),
            TableColumn::new("#", Alignment::Right),
            TableColumn::new("Amount", Alignment::Right),
            TableColumn::new("Category", Alignment::Left).max_width(CATEGORY_MAX_WIDTH),
            TableColumn::new("Date", Alignment::Left),
        ]);
        table.plain = self.plain;
        table.rows = self
            .model
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let marker = if self.highlighted.contains(&idx) { "*" } else { "" };
                match row {
                    TableRow::Entry {
                        serial,
                        amount,
                        category,
                        timestamp,
                    } => vec![
                        marker.to_string(),
                        serial.to_string(),
                        self.format_amount(*amount),
                        category.clone(),
                        timestamp.clone(),
                    ],
                    TableRow::Total { amount } => vec![
                        String::new(),
                        "Total".to_string(),
                        self.format_amount(*amount),
                        String::new(),
                        String::new(),
                    ],
                }
            })
            .collect();

        let lines = table.render_lines();
        if self.plain || self.highlighted.is_empty() {
            return lines.join("\n");
        }
        // Header and rule occupy the first two lines.
        lines
            .into_iter()
            .enumerate()
            .map(|(line, text)| match line.checked_sub(2) {
                Some(row) if self.highlighted.contains(&row) => text.bright_green().to_string(),
                _ => text,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl LedgerView for TableView {
    fn refresh(&mut self, transactions: &[Transaction]) {
        self.model = TableModel::build(transactions, &self.date_format);
        self.highlighted.clear();
    }

    fn highlight_rows(&mut self, rows: &[usize]) {
        let entries = self.model.row_count().saturating_sub(1);
        self.highlighted = rows.iter().copied().filter(|row| *row < entries).collect();
    }
}

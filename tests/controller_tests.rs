use chrono::Utc;
use expense_tracker::{
    config::Config,
    controller::{ExpenseTrackerController, InputValidator},
    ledger::{AmountFilter, CategoryFilter, Filter, Ledger, Transaction, TransactionFilter},
    view::{LedgerView, TableRow, TableView},
};

fn controller() -> ExpenseTrackerController<TableView> {
    let mut config = Config::default();
    config.plain_mode = true;
    ExpenseTrackerController::new(Ledger::new(), TableView::new(&config))
}

fn check_transaction(amount: f64, category: &str, transaction: &Transaction) {
    assert!((transaction.amount() - amount).abs() < 0.01);
    assert_eq!(transaction.category(), category);
    let age = Utc::now() - transaction.timestamp();
    assert!(age.num_milliseconds() < 60_000);
}

#[test]
fn add_transaction_records_entry_and_total() {
    let mut controller = controller();
    assert_eq!(controller.ledger().len(), 0);

    assert!(controller.add_transaction(50.0, "food"));

    assert_eq!(controller.ledger().len(), 1);
    check_transaction(50.0, "food", &controller.ledger().transactions()[0]);
    assert!((controller.ledger().total_cost() - 50.0).abs() < 0.01);
}

#[test]
fn view_shows_entry_and_total_rows() {
    let mut controller = controller();
    assert_eq!(controller.view().model().row_count(), 1);

    assert!(controller.add_transaction(50.0, "food"));

    let model = controller.view().model();
    assert_eq!(model.row_count(), 2);
    match &model.rows()[0] {
        TableRow::Entry {
            amount, category, ..
        } => {
            assert!((amount - 50.0).abs() < 0.01);
            assert_eq!(category, "food");
        }
        other => panic!("expected entry row, got {other:?}"),
    }
    assert_eq!(model.rows()[1], TableRow::Total { amount: 50.0 });
}

#[test]
fn invalid_input_leaves_ledger_unchanged() {
    let mut controller = controller();
    assert!(controller.add_transaction(50.0, "food"));

    assert!(!controller.add_transaction(-1.0, "fruits"));
    assert!(!controller.add_transaction(0.0, "fruits"));
    assert!(!controller.add_transaction(10.0, ""));

    assert_eq!(controller.ledger().len(), 1);
    check_transaction(50.0, "food", &controller.ledger().transactions()[0]);
    assert!((controller.ledger().total_cost() - 50.0).abs() < 0.01);
}

#[test]
fn configured_validator_rejects_out_of_policy_input() {
    let mut config = Config::default();
    config.max_amount = Some(1000.0);
    config.allowed_categories = Some(vec!["food".into(), "bills".into()]);
    let mut controller = ExpenseTrackerController::with_validator(
        Ledger::new(),
        TableView::new(&config),
        InputValidator::from_config(&config),
    );

    assert!(!controller.add_transaction(1500.0, "food"));
    assert!(!controller.add_transaction(20.0, "travel"));
    assert!(controller.add_transaction(20.0, "bills"));
    assert_eq!(controller.ledger().len(), 1);
}

#[test]
fn filter_by_amount_highlights_matching_rows() {
    let mut controller = controller();
    for (amount, category) in [
        (10.0, "food"),
        (100.0, "travel"),
        (10.0, "bills"),
        (50.0, "other"),
    ] {
        assert!(controller.add_transaction(amount, category));
    }

    let amount_filter = AmountFilter::new(10.0);
    let filtered = amount_filter.filter(controller.ledger().transactions());
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|txn| (txn.amount() - 10.0).abs() < 0.01));

    controller.set_filter(amount_filter);
    assert_eq!(controller.apply_filter(), vec![0, 2]);
    assert_eq!(controller.view().highlighted_rows(), &[0, 2]);
    assert_eq!(controller.ledger().len(), 4);
}

#[test]
fn filter_by_category_highlights_matching_rows() {
    let mut controller = controller();
    for (amount, category) in [(10.0, "food"), (100.0, "food"), (10.0, "bills"), (50.0, "other")] {
        assert!(controller.add_transaction(amount, category));
    }

    let category_filter = CategoryFilter::new("food");
    let filtered = category_filter.filter(controller.ledger().transactions());
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|txn| txn.category() == "food"));

    controller.set_filter(category_filter);
    assert_eq!(controller.apply_filter(), vec![0, 1]);
    assert_eq!(controller.filter(), Some(&Filter::category("food")));
}

#[test]
fn undo_removes_the_row() {
    let mut controller = controller();
    assert!(controller.add_transaction(50.0, "food"));
    check_transaction(50.0, "food", &controller.ledger().transactions()[0]);

    let removed = controller.remove_transaction(0).unwrap();

    assert_eq!(removed.category(), "food");
    assert_eq!(controller.ledger().len(), 0);
    assert_eq!(controller.ledger().total_cost(), 0.0);
    assert_eq!(controller.view().model().row_count(), 1);
}

#[test]
fn undo_on_empty_ledger_is_tolerated() {
    let mut controller = controller();
    assert_eq!(controller.ledger().total_cost(), 0.0);

    assert!(controller.remove_transaction(0).is_err());

    assert_eq!(controller.ledger().len(), 0);
    assert_eq!(controller.ledger().total_cost(), 0.0);
}

#[test]
fn custom_views_receive_ledger_contents() {
    #[derive(Default)]
    struct CountingView {
        last_len: usize,
        highlighted: Vec<usize>,
    }

    impl LedgerView for CountingView {
        fn refresh(&mut self, transactions: &[Transaction]) {
            self.last_len = transactions.len();
        }

        fn highlight_rows(&mut self, rows: &[usize]) {
            self.highlighted = rows.to_vec();
        }
    }

    let mut controller = ExpenseTrackerController::new(Ledger::new(), CountingView::default());
    controller.add_transaction(3.0, "food");
    controller.add_transaction(4.0, "food");
    controller.set_filter(Filter::amount(4.0));
    controller.apply_filter();

    assert_eq!(controller.view().last_len, 2);
    assert_eq!(controller.view().highlighted, vec![1]);
}

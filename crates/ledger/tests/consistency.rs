use chrono::NaiveDate;

use ledger::{
    Category, ExpenseDraft, ExpensePatch, Ledger, LedgerError, MoneyCents, total_expenses,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn draft(title: &str, cents: i64, category: &str, day: &str) -> ExpenseDraft {
    ExpenseDraft {
        title: title.to_string(),
        amount: MoneyCents::new(cents),
        category: Category::from_name(category),
        date: date(day),
    }
}

#[test]
fn wallet_scenario_end_to_end() {
    let mut ledger = Ledger::new(MoneyCents::new(5_000_00));

    let lunch = ledger
        .add_expense(draft("Lunch", 20_00, "food", "2024-01-01"))
        .unwrap();
    assert_eq!(ledger.wallet().balance, MoneyCents::new(4_980_00));
    assert_eq!(lunch.id.0, 1);

    let err = ledger
        .add_expense(draft("Rent", 5_000_00, "utilities", "2024-01-02"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds(_)));
    assert_eq!(ledger.wallet().balance, MoneyCents::new(4_980_00));

    ledger.add_income(MoneyCents::new(100_00)).unwrap();
    assert_eq!(ledger.wallet().balance, MoneyCents::new(5_080_00));

    ledger
        .update_expense(
            lunch.id,
            ExpensePatch {
                amount: Some(MoneyCents::new(30_00)),
                ..ExpensePatch::default()
            },
        )
        .unwrap();
    assert_eq!(ledger.wallet().balance, MoneyCents::new(5_070_00));

    ledger.delete_expense(lunch.id).unwrap();
    assert_eq!(ledger.wallet().balance, MoneyCents::new(5_100_00));
    assert!(ledger.expenses().is_empty());
}

#[test]
fn balance_invariant_holds_after_every_operation() {
    let initial = MoneyCents::new(1_000_00);
    let mut ledger = Ledger::new(initial);
    let mut incomes = MoneyCents::ZERO;

    let check = |ledger: &Ledger, incomes: MoneyCents| {
        let spent = total_expenses(&ledger.expenses());
        assert_eq!(ledger.wallet().balance, initial + incomes - spent);
    };

    let a = ledger
        .add_expense(draft("Books", 120_00, "study", "2024-03-01"))
        .unwrap();
    check(&ledger, incomes);

    let b = ledger
        .add_expense(draft("Train", 35_50, "travel", "2024-03-02"))
        .unwrap();
    check(&ledger, incomes);

    ledger.add_income(MoneyCents::new(250_00)).unwrap();
    incomes += MoneyCents::new(250_00);
    check(&ledger, incomes);

    ledger
        .update_expense(
            a.id,
            ExpensePatch {
                amount: Some(MoneyCents::new(150_00)),
                ..ExpensePatch::default()
            },
        )
        .unwrap();
    check(&ledger, incomes);

    // Rejected operations must not move the balance either.
    assert!(
        ledger
            .add_expense(draft("Laptop", 99_999_00, "electronics", "2024-03-03"))
            .is_err()
    );
    check(&ledger, incomes);

    ledger.delete_expense(b.id).unwrap();
    check(&ledger, incomes);

    ledger.delete_expense(a.id).unwrap();
    check(&ledger, incomes);
    assert_eq!(ledger.wallet().balance, initial + incomes);
}

#[test]
fn delete_then_re_add_restores_the_balance() {
    let mut ledger = Ledger::default();
    let expense = ledger
        .add_expense(draft("Lunch", 20_00, "food", "2024-01-01"))
        .unwrap();
    let before_delete = ledger.wallet().balance;

    ledger.delete_expense(expense.id).unwrap();
    let re_added = ledger
        .add_expense(draft("Lunch", 20_00, "food", "2024-01-01"))
        .unwrap();

    assert_eq!(ledger.wallet().balance, before_delete);
    assert_ne!(re_added.id, expense.id);
}

#[test]
fn snapshot_round_trip_preserves_state_and_id_allocation() {
    let mut ledger = Ledger::default();
    ledger
        .add_expense(draft("Lunch", 20_00, "food", "2024-01-01"))
        .unwrap();
    let kept = ledger
        .add_expense(draft("Cinema", 15_00, "entertainment", "2024-01-02"))
        .unwrap();

    let snapshot = ledger.snapshot();
    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: ledger::Snapshot = serde_json::from_str(&encoded).unwrap();
    let mut restored = Ledger::from_snapshot(decoded);

    assert_eq!(restored.wallet(), ledger.wallet());
    assert_eq!(restored.expenses(), ledger.expenses());
    assert_eq!(restored.budget_settings(), ledger.budget_settings());

    let fresh = restored
        .add_expense(draft("Coffee", 3_00, "food", "2024-01-03"))
        .unwrap();
    assert!(fresh.id > kept.id);
}

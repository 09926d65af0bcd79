//! Itemized settlement: per-payer debt aggregation
//!
//! Every beneficiary owes each expense's payer their share. Debts between
//! the same debtor and creditor are summed and keep the expenses behind
//! them; opposite-direction debts are never netted against each other.

use std::collections::HashMap;

use super::balance::allocate_shares;
use crate::models::{Ledger, Money, Transfer, TransferItem};

/// Aggregation key: who owes, and to whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey<'a> {
    debtor: &'a str,
    creditor: &'a str,
}

/// Compute one transfer per (debtor, creditor) pair, in first-seen order
///
/// Expenses with no remaining beneficiary are skipped, as are expenses whose
/// payer is unattributed or no longer a participant. A payer's own share
/// never becomes a transfer, and non-positive shares produce no line items.
pub fn itemized_settlements(ledger: &Ledger) -> Vec<Transfer> {
    let mut slots: HashMap<PairKey<'_>, usize> = HashMap::new();
    let mut transfers: Vec<Transfer> = Vec::new();

    for expense in ledger.expenses() {
        let beneficiaries = ledger.current_beneficiaries(expense);
        if beneficiaries.is_empty() {
            continue;
        }
        let Some(payer) = ledger.current_payer(expense) else {
            tracing::debug!(expense = %expense.id, "skipping expense without a current payer");
            continue;
        };

        for (debtor, share) in allocate_shares(expense.amount, &beneficiaries) {
            if debtor == payer || !share.is_positive() {
                continue;
            }

            let key = PairKey {
                debtor,
                creditor: payer,
            };
            let slot = *slots.entry(key).or_insert_with(|| {
                transfers.push(Transfer::new(debtor, payer, Money::zero()));
                transfers.len() - 1
            });

            let transfer = &mut transfers[slot];
            transfer.amount += share;
            transfer.items.push(TransferItem {
                reason: expense.reason().to_string(),
                amount: share,
            });
        }
    }

    tracing::debug!(transfers = transfers.len(), "itemized settlement computed");
    transfers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, UNTITLED_ITEM};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn expense(item: &str, units: i64, payer: &str, split: &[&str]) -> Expense {
        Expense::new(date(), Money::from_units(units), Some(payer.to_string()))
            .with_item(item)
            .with_split(split.iter().copied())
    }

    #[test]
    fn test_dinner_and_drinks() {
        let ledger = Ledger::sample(date());
        let transfers = itemized_settlements(&ledger);

        let pairs: Vec<(&str, &str, Money)> = transfers
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Bob", "Alice", Money::from_units(600)),
                ("Charlie", "Alice", Money::from_units(600)),
                ("Alice", "Bob", Money::from_units(200)),
                ("Charlie", "Bob", Money::from_units(200)),
            ]
        );
        assert_eq!(transfers[0].items.len(), 1);
        assert_eq!(transfers[0].items[0].reason, "Dinner");
    }

    #[test]
    fn test_same_pair_accumulates_items() {
        let ledger = Ledger::from_names(
            ["A", "B"],
            vec![
                expense("Lunch", 20, "A", &["A", "B"]),
                expense("", 30, "A", &["B"]),
            ],
        )
        .unwrap();
        let transfers = itemized_settlements(&ledger);

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].amount, Money::from_units(40));
        let reasons: Vec<&str> = transfers[0].items.iter().map(|i| i.reason.as_str()).collect();
        assert_eq!(reasons, vec!["Lunch", UNTITLED_ITEM]);
    }

    #[test]
    fn test_opposite_debts_are_not_netted() {
        let ledger = Ledger::from_names(
            ["A", "B"],
            vec![
                expense("Dinner", 40, "A", &["B"]),
                expense("Drinks", 10, "B", &["A"]),
            ],
        )
        .unwrap();
        let transfers = itemized_settlements(&ledger);

        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from, "B");
        assert_eq!(transfers[0].amount, Money::from_units(40));
        assert_eq!(transfers[1].from, "A");
        assert_eq!(transfers[1].amount, Money::from_units(10));
    }

    #[test]
    fn test_empty_split_is_skipped() {
        let ledger =
            Ledger::from_names(["A", "B"], vec![expense("Solo", 100, "A", &[])]).unwrap();
        assert!(itemized_settlements(&ledger).is_empty());
    }

    #[test]
    fn test_unattributed_payer_is_skipped() {
        let mut e = expense("Taxi", 30, "A", &["A", "B"]);
        e.paid_by = None;
        let ledger = Ledger::from_names(["A", "B"], vec![e]).unwrap();
        assert!(itemized_settlements(&ledger).is_empty());
    }

    #[test]
    fn test_self_share_never_transfers() {
        let ledger =
            Ledger::from_names(["A"], vec![expense("Snack", 5, "A", &["A"])]).unwrap();
        assert!(itemized_settlements(&ledger).is_empty());
    }
}

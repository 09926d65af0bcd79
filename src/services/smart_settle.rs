//! Smart settlement: greedy minimal-transfer netting
//!
//! Pools every participant's net position and pairs the largest debtor with
//! the largest creditor until everyone is square. Produces at most `n - 1`
//! transfers for `n` unsettled participants, but does not preserve who owes
//! whom for which expense.

use crate::models::{Balance, Money, Transfer};

/// Balances smaller than this in magnitude count as settled
pub const SETTLED_TOLERANCE: Money = Money::from_cents(1);

fn is_settled(amount: Money) -> bool {
    amount.abs() < SETTLED_TOLERANCE
}

/// Compute the transfers that zero every balance
///
/// Debtors are matched most-negative first and creditors largest first.
/// Both sorts are stable, so equal balances keep participant order and the
/// output is reproducible.
pub fn smart_settlements(balances: &[Balance]) -> Vec<Transfer> {
    let mut debtors: Vec<(&str, Money)> = balances
        .iter()
        .filter(|b| b.net.is_negative() && !is_settled(b.net))
        .map(|b| (b.name.as_str(), b.net))
        .collect();
    let mut creditors: Vec<(&str, Money)> = balances
        .iter()
        .filter(|b| b.net.is_positive() && !is_settled(b.net))
        .map(|b| (b.name.as_str(), b.net))
        .collect();

    debtors.sort_by_key(|&(_, net)| net);
    creditors.sort_by_key(|&(_, net)| std::cmp::Reverse(net));

    let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let (debtor, owed) = debtors[i];
        let (creditor, due) = creditors[j];
        let amount = (-owed).min(due);

        transfers.push(Transfer::new(debtor, creditor, amount));

        debtors[i].1 += amount;
        creditors[j].1 -= amount;

        if is_settled(debtors[i].1) {
            i += 1;
        }
        if is_settled(creditors[j].1) {
            j += 1;
        }
    }

    tracing::debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = transfers.len(),
        "smart settlement computed"
    );
    transfers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(nets: &[(&str, i64)]) -> Vec<Balance> {
        nets.iter()
            .map(|&(name, net)| {
                if net >= 0 {
                    Balance::new(name, Money::from_cents(net), Money::zero())
                } else {
                    Balance::new(name, Money::zero(), Money::from_cents(-net))
                }
            })
            .collect()
    }

    fn summary(transfers: &[Transfer]) -> Vec<(&str, &str, i64)> {
        transfers
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount.cents()))
            .collect()
    }

    #[test]
    fn test_dinner_and_drinks() {
        let input = balances(&[("Alice", 100000), ("Bob", -20000), ("Charlie", -80000)]);
        let transfers = smart_settlements(&input);
        assert_eq!(
            summary(&transfers),
            vec![("Charlie", "Alice", 80000), ("Bob", "Alice", 20000)]
        );
    }

    #[test]
    fn test_exact_match_advances_both() {
        let input = balances(&[("A", 500), ("B", -500), ("C", 300), ("D", -300)]);
        let transfers = smart_settlements(&input);
        assert_eq!(summary(&transfers), vec![("B", "A", 500), ("D", "C", 300)]);
    }

    #[test]
    fn test_one_debtor_many_creditors() {
        let input = balances(&[("A", 100), ("B", 300), ("C", -400)]);
        let transfers = smart_settlements(&input);
        assert_eq!(summary(&transfers), vec![("C", "B", 300), ("C", "A", 100)]);
    }

    #[test]
    fn test_ties_keep_participant_order() {
        let input = balances(&[("A", 200), ("B", -100), ("C", -100)]);
        let transfers = smart_settlements(&input);
        assert_eq!(summary(&transfers), vec![("B", "A", 100), ("C", "A", 100)]);
    }

    #[test]
    fn test_settled_balances_are_skipped() {
        let input = balances(&[("A", 0), ("B", 0)]);
        assert!(smart_settlements(&input).is_empty());
        assert!(smart_settlements(&[]).is_empty());
    }

    #[test]
    fn test_at_most_n_minus_one_transfers() {
        let input = balances(&[("A", 700), ("B", -250), ("C", 150), ("D", -400), ("E", -200)]);
        let transfers = smart_settlements(&input);
        assert!(transfers.len() <= 4);

        let moved: Money = transfers.iter().map(|t| t.amount).sum();
        assert_eq!(moved, Money::from_cents(850));
    }
}

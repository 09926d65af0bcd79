//! Balance calculation
//!
//! Reduces a ledger to one paid/share/net record per participant.

use std::collections::HashMap;

use crate::models::{Balance, Ledger, Money};

/// Computes participant balances from a ledger snapshot
pub struct BalanceCalculator<'a> {
    ledger: &'a Ledger,
}

impl<'a> BalanceCalculator<'a> {
    /// Create a calculator over a ledger
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// One balance per participant, in participant order
    ///
    /// An expense with no remaining beneficiary is treated as self-paid: its
    /// payer carries the whole cost. Unattributed expenses are left out
    /// until a payer is assigned. Payers and beneficiaries that are no
    /// longer participants are dropped.
    pub fn compute(&self) -> Vec<Balance> {
        let mut totals: HashMap<&str, (Money, Money)> = self
            .ledger
            .participants()
            .iter()
            .map(|p| (p.name(), (Money::zero(), Money::zero())))
            .collect();

        for expense in self.ledger.expenses() {
            let Some(named_payer) = expense.paid_by.as_deref() else {
                tracing::debug!(expense = %expense.id, "skipping unattributed expense");
                continue;
            };

            let mut beneficiaries = self.ledger.current_beneficiaries(expense);
            if beneficiaries.is_empty() {
                beneficiaries.push(named_payer);
            }

            if let Some(payer) = self.ledger.current_payer(expense) {
                if let Some((paid, _)) = totals.get_mut(payer) {
                    *paid += expense.amount;
                }
            }

            for (name, cost) in allocate_shares(expense.amount, &beneficiaries) {
                if let Some((_, share)) = totals.get_mut(name) {
                    *share += cost;
                }
            }
        }

        self.ledger
            .participants()
            .iter()
            .map(|p| {
                let (paid, share) = totals
                    .get(p.name())
                    .copied()
                    .unwrap_or((Money::zero(), Money::zero()));
                Balance::new(p.name(), paid, share)
            })
            .collect()
    }
}

/// Compute balances for every participant of `ledger`
pub fn compute_balances(ledger: &Ledger) -> Vec<Balance> {
    BalanceCalculator::new(ledger).compute()
}

/// Pair each beneficiary with its per-head cost
///
/// Costs are whole cents and sum exactly to `amount`; leftover cents go to
/// the leading beneficiaries.
pub(crate) fn allocate_shares<'n>(amount: Money, beneficiaries: &[&'n str]) -> Vec<(&'n str, Money)> {
    beneficiaries
        .iter()
        .copied()
        .zip(amount.split_evenly(beneficiaries.len()))
        .collect()
}

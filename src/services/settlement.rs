//! Settlement engine
//!
//! Single entry point that turns a ledger into transfers under a chosen
//! [`SettlementStrategy`]. Everything is recomputed from the snapshot on each
//! call; nothing is cached between calls.

use serde::Serialize;

use super::balance::compute_balances;
use super::itemized_settle::itemized_settlements;
use super::smart_settle::smart_settlements;
use crate::models::{Balance, Ledger, Money, SettlementStrategy, Transfer};

/// Everything a host needs to render a settle-up screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReport {
    /// Strategy used to produce `transfers`
    pub strategy: SettlementStrategy,
    /// Per-participant balances, in participant order
    pub balances: Vec<Balance>,
    /// Transfers settling the ledger
    pub transfers: Vec<Transfer>,
    /// Sum of every expense amount
    pub total_spent: Money,
    /// Sum of every transfer amount
    pub total_moved: Money,
}

/// Computes balances and settlements for one ledger snapshot
pub struct SettlementEngine<'a> {
    ledger: &'a Ledger,
}

impl<'a> SettlementEngine<'a> {
    /// Create an engine over a ledger
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Participant balances
    pub fn balances(&self) -> Vec<Balance> {
        compute_balances(self.ledger)
    }

    /// Transfers under `strategy`
    pub fn settle(&self, strategy: SettlementStrategy) -> Vec<Transfer> {
        match strategy {
            SettlementStrategy::Smart => smart_settlements(&self.balances()),
            SettlementStrategy::Itemized => itemized_settlements(self.ledger),
        }
    }

    /// Balances, transfers and totals under `strategy`
    pub fn report(&self, strategy: SettlementStrategy) -> SettlementReport {
        let balances = self.balances();
        let transfers = match strategy {
            SettlementStrategy::Smart => smart_settlements(&balances),
            SettlementStrategy::Itemized => itemized_settlements(self.ledger),
        };
        let total_moved = transfers.iter().map(|t| t.amount).sum();

        SettlementReport {
            strategy,
            balances,
            transfers,
            total_spent: self.ledger.total_spent(),
            total_moved,
        }
    }
}

/// Compute the transfers settling `ledger` under `strategy`
pub fn compute_settlements(strategy: SettlementStrategy, ledger: &Ledger) -> Vec<Transfer> {
    SettlementEngine::new(ledger).settle(strategy)
}

/// Net balances left after every transfer is paid
///
/// Debtors' nets rise by what they send and creditors' nets fall by what
/// they receive. Names missing from `balances` are ignored.
pub fn apply_transfers(balances: &[Balance], transfers: &[Transfer]) -> Vec<Balance> {
    let mut result = balances.to_vec();
    for transfer in transfers {
        for balance in result.iter_mut() {
            if balance.name == transfer.from {
                balance.net += transfer.amount;
            } else if balance.name == transfer.to {
                balance.net -= transfer.amount;
            }
        }
    }
    result
}

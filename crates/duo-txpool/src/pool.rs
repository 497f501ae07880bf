//! The ValueChain transaction pool: a mutex-protected ordered sequence
//! of pending transactions. Duplicates are tolerated and nothing is
//! validated at insertion — validation is the consensus engine's job,
//! at block-production and block-acceptance time.

use duo_types::Transaction;
use parking_lot::Mutex;

/// Pending-transaction pool shared between the transaction-submission
/// path (network) and the ValueChain consensus engine.
#[derive(Default)]
pub struct TxPool {
    pending: Mutex<Vec<Transaction>>,
}

impl TxPool {
    /// An empty pool.
    pub fn new() -> Self {
        TxPool {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Append a transaction under lock. No validation, no dedup.
    pub fn add_transaction(&self, tx: Transaction) {
        self.pending.lock().push(tx);
        tracing::debug!("transaction added to pool");
    }

    /// Current number of pending transactions.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// True if the pool holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Atomically remove and return every pending transaction, in
    /// insertion order, leaving the pool empty. Used by block
    /// production to seed a new block's body.
    pub fn drain(&self) -> Vec<Transaction> {
        std::mem::take(&mut *self.pending.lock())
    }

    /// Remove every pending transaction equal to one in `included`.
    /// Used once a block is accepted, so transactions it carried are
    /// not offered again by a later `drain`.
    pub fn remove_included(&self, included: &[Transaction]) {
        let mut guard = self.pending.lock();
        guard.retain(|tx| !included.contains(tx));
    }
}

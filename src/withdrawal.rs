multiversx_sc::imports!();

use crate::types::ResetMode;

#[multiversx_sc::module]
pub trait WithdrawalModule:
    crate::storage::StorageModule
    + crate::ledger::LedgerModule
    + crate::access::AccessModule
    + crate::events::EventsModule
{
    /// Moves the whole pool to the owner and empties the ledger.
    ///
    /// The ledger is cleared before the transfer goes out, so anything the
    /// transfer triggers sees an empty pool. If the transaction fails after
    /// this point the VM reverts the reset along with the transfer.
    /// An empty pool withdraws as a no-op.
    fn withdraw_pool(&self, mode: ResetMode) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        let funders_cleared = match mode {
            ResetMode::Standard => self.reset(),
            ResetMode::Cached => self.reset_cached(),
        };

        if balance > 0u64 {
            self.send().direct_egld(&caller, &balance);
        }

        self.withdraw_event(&caller, &balance, mode == ResetMode::Cached, funders_cleared);

        balance
    }
}

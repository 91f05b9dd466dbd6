multiversx_sc::imports!();

use crate::errors::ERROR_INDEX_OUT_OF_RANGE;

/// Contributor -> cumulative amount, plus the ordered funders roster.
/// All writes to either structure go through here.
#[multiversx_sc::module]
pub trait LedgerModule: crate::storage::StorageModule {
    fn record(&self, funder: &ManagedAddress, amount: &BigUint) {
        self.address_to_amount_funded(funder)
            .update(|funded| *funded += amount);
        self.funders().push(funder);
    }

    /// Clears every funder's amount by reading the roster from storage
    /// entry by entry, then empties the roster. Returns the roster length.
    fn reset(&self) -> usize {
        let funders_len = self.funders().len();
        for index in 1..=funders_len {
            let funder = self.funders().get(index);
            self.address_to_amount_funded(&funder).clear();
        }
        self.funders().clear();

        funders_len
    }

    /// Same outcome as `reset`, but the roster is read once into memory
    /// and storage is cleared before walking the local copy.
    fn reset_cached(&self) -> usize {
        let mut funders: ManagedVec<ManagedAddress> = ManagedVec::new();
        for funder in self.funders().iter() {
            funders.push(funder);
        }
        self.funders().clear();

        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }

        funders.len()
    }

    fn amount_funded(&self, funder: &ManagedAddress) -> BigUint {
        self.address_to_amount_funded(funder).get()
    }

    /// Zero-based roster lookup.
    fn funder_at(&self, index: usize) -> ManagedAddress {
        require!(index < self.funders().len(), ERROR_INDEX_OUT_OF_RANGE);
        self.funders().get(index + 1)
    }
}

multiversx_sc::imports!();

use crate::errors::ERROR_NOT_OWNER;

#[multiversx_sc::module]
pub trait AccessModule: crate::storage::StorageModule {
    fn is_owner(&self, address: &ManagedAddress) -> bool {
        &self.owner().get() == address
    }

    fn require_owner(&self, address: &ManagedAddress) {
        require!(self.is_owner(address), ERROR_NOT_OWNER);
    }
}

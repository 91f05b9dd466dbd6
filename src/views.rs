multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::ledger::LedgerModule
    + crate::price_converter::PriceConverterModule
{
    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed_address().get()
    }

    #[view(owner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        self.funder_at(index)
    }

    #[view(getAddToAmtFunded)]
    fn get_add_to_amt_funded(&self, funder: &ManagedAddress) -> BigUint {
        self.amount_funded(funder)
    }

    /// Roster length; a funder who contributed twice counts twice.
    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getPoolBalance)]
    fn get_pool_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd().get()
    }

    #[view(getConversionRate)]
    fn get_conversion_rate(&self, egld_amount: BigUint) -> BigUint {
        self.conversion_rate(&egld_amount)
    }
}

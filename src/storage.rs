multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration, fixed at deploy ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// USD threshold scaled by `10^PRICE_DECIMALS`
    #[storage_mapper("minimumUsd")]
    fn minimum_usd(&self) -> SingleValueMapper<BigUint>;

    // ── Funding ledger ──

    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Every accepted contribution appends its funder, repeats included.
    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}

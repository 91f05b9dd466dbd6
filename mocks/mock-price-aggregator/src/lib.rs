#![no_std]

multiversx_sc::imports!();

pub mod mock_price_aggregator_proxy;

/// Stand-in for the EGLD/USD price aggregator. Serves whatever round was
/// last set, for any pair. For testing purposes only.
#[multiversx_sc::contract]
pub trait MockPriceAggregator {
    #[init]
    fn init(&self, price: BigUint, decimals: u8) {
        self.set_latest_price_feed(price, decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setLatestPriceFeed)]
    fn set_latest_price_feed(&self, price: BigUint, decimals: u8) {
        self.price().set(&price);
        self.decimals().set(decimals);
        self.round_id().update(|round_id| *round_id += 1);
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> MultiValue6<u32, ManagedBuffer, ManagedBuffer, u64, BigUint, u8> {
        let timestamp = self.blockchain().get_block_timestamp();
        (
            self.round_id().get(),
            from,
            to,
            timestamp,
            self.price().get(),
            self.decimals().get(),
        )
            .into()
    }

    #[storage_mapper("roundId")]
    fn round_id(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;
}

multiversx_sc::imports!();

use crate::{
    constants::{EGLD_DECIMALS, EGLD_TICKER, PRICE_DECIMALS, USD_TICKER},
    errors::{ERROR_INSUFFICIENT_CONTRIBUTION, ERROR_INVALID_PRICE},
    price_aggregator_proxy,
    types::PriceFeed,
};

/// Reads the EGLD/USD rate from the bound aggregator and gates
/// contributions on their USD value.
///
/// USD amounts are always expressed with `PRICE_DECIMALS` decimals, so
/// `50 * 10^18` means 50 USD.
#[multiversx_sc::module]
pub trait PriceConverterModule: crate::storage::StorageModule {
    fn latest_price_feed(&self) -> PriceFeed<Self::Api> {
        let price_feed_address = self.price_feed_address().get();
        self.tx()
            .to(&price_feed_address)
            .typed(price_aggregator_proxy::PriceAggregatorProxy)
            .latest_price_feed(
                ManagedBuffer::from(EGLD_TICKER),
                ManagedBuffer::from(USD_TICKER),
            )
            .returns(ReturnsResult)
            .sync_call()
            .into()
    }

    /// Price of 1 EGLD in USD, scaled to `PRICE_DECIMALS`.
    fn get_price(&self) -> BigUint {
        let feed = self.latest_price_feed();
        require!(feed.price > 0u64, ERROR_INVALID_PRICE);

        let decimals = feed.decimals as u32;
        if decimals <= PRICE_DECIMALS {
            feed.price * self.ten_pow(PRICE_DECIMALS - decimals)
        } else {
            feed.price / self.ten_pow(decimals - PRICE_DECIMALS)
        }
    }

    fn conversion_rate(&self, egld_amount: &BigUint) -> BigUint {
        let price = self.get_price();
        (price * egld_amount) / self.ten_pow(EGLD_DECIMALS)
    }

    /// Returns the USD value of `egld_amount` when it meets the minimum.
    fn require_minimum_contribution(&self, egld_amount: &BigUint) -> BigUint {
        let usd_value = self.conversion_rate(egld_amount);
        require!(
            usd_value >= self.minimum_usd().get(),
            ERROR_INSUFFICIENT_CONTRIBUTION
        );
        usd_value
    }

    fn usd(&self, whole_dollars: u64) -> BigUint {
        BigUint::from(whole_dollars) * self.ten_pow(PRICE_DECIMALS)
    }

    fn ten_pow(&self, exponent: u32) -> BigUint {
        BigUint::from(10u64).pow(exponent)
    }
}

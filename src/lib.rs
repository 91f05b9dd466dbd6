#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod constants;
pub mod errors;
pub mod events;
pub mod fund_me_proxy;
pub mod ledger;
pub mod price_aggregator_proxy;
pub mod price_converter;
pub mod storage;
pub mod types;
pub mod views;
pub mod withdrawal;

use constants::DEFAULT_MINIMUM_USD;
use errors::{ERROR_INVALID_MINIMUM_USD, ERROR_INVALID_PRICE_FEED};
use types::ResetMode;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe:
    storage::StorageModule
    + ledger::LedgerModule
    + access::AccessModule
    + price_converter::PriceConverterModule
    + withdrawal::WithdrawalModule
    + events::EventsModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner. `minimum_usd` is scaled by 10^18
    /// and defaults to 50 USD.
    #[init]
    fn init(&self, price_feed_address: ManagedAddress, minimum_usd: OptionalValue<BigUint>) {
        require!(
            self.blockchain().is_smart_contract(&price_feed_address),
            ERROR_INVALID_PRICE_FEED
        );

        let minimum_usd = match minimum_usd {
            OptionalValue::Some(minimum_usd) => minimum_usd,
            OptionalValue::None => self.usd(DEFAULT_MINIMUM_USD),
        };
        require!(minimum_usd > 0u64, ERROR_INVALID_MINIMUM_USD);

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.price_feed_address().set(&price_feed_address);
        self.minimum_usd().set(&minimum_usd);
    }

    /// Owner, price feed and minimum are immutable; upgrading keeps the ledger.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let usd_value = self.require_minimum_contribution(&payment_amount);
        self.record(&caller, &payment_amount);

        self.fund_event(&caller, &payment_amount, &usd_value);
    }

    // ========================================================
    // ENDPOINTS: withdraw / cheapWithdraw
    // Owner only. Both leave the same final state.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.withdraw_pool(ResetMode::Standard);
    }

    #[endpoint(cheapWithdraw)]
    fn cheap_withdraw(&self) {
        self.withdraw_pool(ResetMode::Cached);
    }
}

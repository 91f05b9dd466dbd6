#![no_std]

multiversx_sc::imports!();

pub mod mock_owner_proxy;

/// Contract account used as a fund owner whose receipt of the pool fails.
/// For testing purposes only.
#[multiversx_sc::contract]
pub trait MockOwner {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Calls `endpoint` (`withdraw` or `cheapWithdraw`) on `fund_me`, then
    /// rejects the incoming funds by failing the transaction.
    #[endpoint(withdrawAndReject)]
    fn withdraw_and_reject(&self, fund_me: ManagedAddress, endpoint: ManagedBuffer) {
        self.tx().to(&fund_me).raw_call(endpoint).sync_call();

        sc_panic!("Transfer rejected");
    }
}

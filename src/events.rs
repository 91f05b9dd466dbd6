multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        usd_value: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] cheap: bool,
        funders_cleared: usize,
    );
}

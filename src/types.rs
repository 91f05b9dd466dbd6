multiversx_sc::imports!();

// ============================================================
// Price Feed — the parts of an aggregator round the gate needs
// ============================================================

pub struct PriceFeed<M: ManagedTypeApi> {
    /// Raw price, scaled by `10^decimals`
    pub price: BigUint<M>,
    pub decimals: u8,
}

impl<M: ManagedTypeApi>
    From<MultiValue6<u32, ManagedBuffer<M>, ManagedBuffer<M>, u64, BigUint<M>, u8>>
    for PriceFeed<M>
{
    fn from(
        value: MultiValue6<u32, ManagedBuffer<M>, ManagedBuffer<M>, u64, BigUint<M>, u8>,
    ) -> Self {
        let (_round_id, _from, _to, _timestamp, price, decimals) = value.into_tuple();
        PriceFeed { price, decimals }
    }
}

// ============================================================
// Reset Mode — how the withdrawal walks the funders roster
// ============================================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ResetMode {
    /// Reads each roster entry straight from storage.
    Standard,
    /// Loads the roster into memory once, then clears storage.
    Cached,
}

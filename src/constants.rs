/// Minimum contribution, in whole USD, when `init` is not given one
pub const DEFAULT_MINIMUM_USD: u64 = 50;

/// EGLD smallest-unit scale: 1 EGLD = 10^18
pub const EGLD_DECIMALS: u32 = 18;

/// Scale every aggregator price is normalized to before conversion
pub const PRICE_DECIMALS: u32 = 18;

/// Price pair queried from the aggregator
pub const EGLD_TICKER: &[u8] = b"EGLD";
pub const USD_TICKER: &[u8] = b"USD";

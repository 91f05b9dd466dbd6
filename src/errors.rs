pub static ERROR_INSUFFICIENT_CONTRIBUTION: &[u8] = b"Insufficient contribution";
pub static ERROR_NOT_OWNER: &[u8] = b"Not owner";
pub static ERROR_INDEX_OUT_OF_RANGE: &[u8] = b"Index out of range";
pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid price";
pub static ERROR_INVALID_PRICE_FEED: &[u8] = b"Invalid price feed address";
pub static ERROR_INVALID_MINIMUM_USD: &[u8] = b"Invalid minimum USD value";

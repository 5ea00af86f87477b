/// Tag for the AuctionConfigured event.
pub const AUCTION_CONFIGURED_TAG: u8 = u8::MAX;

/// Tag for the PurchaseRecorded event.
pub const PURCHASE_RECORDED_TAG: u8 = u8::MAX - 1;

/// Tag for the AuctionFinalized event.
pub const AUCTION_FINALIZED_TAG: u8 = u8::MAX - 2;

/// Tag for the ExcessReclaimed event.
pub const EXCESS_RECLAIMED_TAG: u8 = u8::MAX - 3;

/// Tag for the AuctionReset event.
pub const AUCTION_RESET_TAG: u8 = u8::MAX - 4;

/// Tag for the HalfLifeRangeUpdated event.
pub const HALF_LIFE_RANGE_TAG: u8 = u8::MAX - 5;

/// Shortest price decay half-life accepted by default, in seconds.
pub const DEFAULT_MIN_HALF_LIFE_SECONDS: u64 = 45;

/// Longest price decay half-life accepted by default, in seconds.
pub const DEFAULT_MAX_HALF_LIFE_SECONDS: u64 = 3600;

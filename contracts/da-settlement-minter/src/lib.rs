//! Dutch auction minter with settlement.
//!
//! Artists configure an exponentially decaying auction per project. Collectors
//! purchase at the current price and the contract escrows their payments until
//! the auction settles. Once settled, the revenue at the settled price is split
//! between artist, platform and render provider, and every collector can
//! reclaim what they paid above the settled price.
#![cfg_attr(not(feature = "std"), no_std)]

mod clock;
mod contract;
mod events;
mod external;
mod ledger;
mod state;

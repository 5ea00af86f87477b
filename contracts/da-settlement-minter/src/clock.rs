use commons::{CustomContractError, DEFAULT_MAX_HALF_LIFE_SECONDS, DEFAULT_MIN_HALF_LIFE_SECONDS};
use concordium_std::*;

/// Price of a token at a point in time.
pub trait Pricing {
    fn price_at(&self, now: Timestamp) -> Result<Amount, CustomContractError>;
}

/// Allowed price decay half-life bounds, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct HalfLifeRange {
    pub min: Duration,
    pub max: Duration,
}

impl Default for HalfLifeRange {
    fn default() -> Self {
        Self {
            min: Duration::from_seconds(DEFAULT_MIN_HALF_LIFE_SECONDS),
            max: Duration::from_seconds(DEFAULT_MAX_HALF_LIFE_SECONDS),
        }
    }
}

impl HalfLifeRange {
    pub fn validate(&self) -> Result<(), CustomContractError> {
        ensure!(
            self.min.millis() > 0 && self.min <= self.max,
            CustomContractError::InvalidAuctionParameters
        );
        Ok(())
    }

    pub fn contains(&self, half_life: Duration) -> bool {
        self.min <= half_life && half_life <= self.max
    }
}

/// Exponential decay auction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionParameters {
    /// Auction start. There is no price before it.
    pub start: Timestamp,
    /// Time it takes for the price to halve.
    pub price_decay_half_life: Duration,
    /// Price at `start`.
    pub starting_price: Amount,
    /// Price floor.
    pub base_price: Amount,
    /// Auction expires when no purchase happens for this long.
    pub finalization_timeout: Option<Duration>,
}

impl AuctionParameters {
    pub fn validate(
        &self,
        now: Timestamp,
        range: &HalfLifeRange,
    ) -> Result<(), CustomContractError> {
        ensure!(
            self.start > now,
            CustomContractError::InvalidAuctionParameters
        );
        ensure!(
            self.base_price > Amount::zero() && self.base_price <= self.starting_price,
            CustomContractError::InvalidAuctionParameters
        );
        ensure!(
            self.price_decay_half_life.millis() > 0 && range.contains(self.price_decay_half_life),
            CustomContractError::InvalidAuctionParameters
        );
        if let Some(timeout) = self.finalization_timeout {
            ensure!(
                timeout.millis() > 0,
                CustomContractError::InvalidAuctionParameters
            );
        }
        Ok(())
    }

    /// Whether the price has decayed down to the floor.
    pub fn is_at_base(&self, now: Timestamp) -> bool {
        self.price_at(now)
            .map(|price| price == self.base_price)
            .unwrap_or(false)
    }
}

impl Pricing for AuctionParameters {
    /// The price halves once per full half-life elapsed since the start and
    /// stays flat in between, never going below the base price.
    fn price_at(&self, now: Timestamp) -> Result<Amount, CustomContractError> {
        ensure!(now >= self.start, CustomContractError::AuctionNotStarted);

        let half_life = self.price_decay_half_life.millis();
        ensure!(half_life > 0, CustomContractError::InvalidAuctionParameters);

        let elapsed = now.timestamp_millis() - self.start.timestamp_millis();
        let halvings = elapsed / half_life;
        let decayed = if halvings >= 64 {
            0
        } else {
            self.starting_price.micro_ccd >> halvings
        };

        Ok(Amount::from_micro_ccd(
            decayed.max(self.base_price.micro_ccd),
        ))
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const HOUR_MILLIS: u64 = 3_600_000;
    const START_MILLIS: u64 = 1_000_000_000;

    fn at(offset_millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS + offset_millis)
    }

    fn hourly_params() -> AuctionParameters {
        AuctionParameters {
            start: at(0),
            price_decay_half_life: Duration::from_seconds(3600),
            starting_price: Amount::from_ccd(1),
            base_price: Amount::from_micro_ccd(100_000),
            finalization_timeout: None,
        }
    }

    #[concordium_test]
    fn test_price_halves_per_half_life() {
        let params = hourly_params();

        claim_eq!(params.price_at(at(0)), Ok(Amount::from_ccd(1)));
        claim_eq!(
            params.price_at(at(HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(500_000))
        );
        claim_eq!(
            params.price_at(at(2 * HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(250_000))
        );
    }

    #[concordium_test]
    fn test_price_is_flat_within_half_life() {
        let params = hourly_params();

        claim_eq!(params.price_at(at(HOUR_MILLIS - 1)), Ok(Amount::from_ccd(1)));
        claim_eq!(
            params.price_at(at(HOUR_MILLIS + HOUR_MILLIS / 2)),
            Ok(Amount::from_micro_ccd(500_000))
        );
    }

    #[concordium_test]
    fn test_price_floor() {
        let params = hourly_params();

        // 1 CCD / 16 is below the 0.1 CCD floor
        claim_eq!(
            params.price_at(at(4 * HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(100_000))
        );
        claim!(params.is_at_base(at(4 * HOUR_MILLIS)));
        claim!(!params.is_at_base(at(3 * HOUR_MILLIS)));

        // Shifting by 64 or more halvings must not overflow
        claim_eq!(
            params.price_at(at(100 * HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(100_000))
        );
    }

    #[concordium_test]
    fn test_price_before_start() {
        let params = hourly_params();

        claim_eq!(
            params.price_at(Timestamp::from_timestamp_millis(START_MILLIS - 1)),
            Err(CustomContractError::AuctionNotStarted)
        );
        claim!(!params.is_at_base(Timestamp::from_timestamp_millis(0)));
    }

    #[concordium_test]
    fn test_price_is_monotonic_and_floored() {
        let params = AuctionParameters {
            price_decay_half_life: Duration::from_seconds(45),
            starting_price: Amount::from_micro_ccd(987_654_321),
            base_price: Amount::from_micro_ccd(1_234),
            ..hourly_params()
        };

        let mut previous = params
            .price_at(at(0))
            .expect_report("Auction has started");
        for step in 1..2_000u64 {
            let price = params
                .price_at(at(step * 7_919))
                .expect_report("Auction has started");
            claim!(price <= previous, "Price must never increase");
            claim!(price >= params.base_price, "Price must never drop below base");
            previous = price;
        }
    }

    #[concordium_test]
    fn test_validate() {
        let range = HalfLifeRange::default();
        let now = Timestamp::from_timestamp_millis(START_MILLIS - 10);

        claim_eq!(hourly_params().validate(now, &range), Ok(()));

        let base_above_start = AuctionParameters {
            base_price: Amount::from_ccd(2),
            ..hourly_params()
        };
        claim_eq!(
            base_above_start.validate(now, &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );

        let zero_base = AuctionParameters {
            base_price: Amount::zero(),
            ..hourly_params()
        };
        claim_eq!(
            zero_base.validate(now, &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );

        let short_half_life = AuctionParameters {
            price_decay_half_life: Duration::from_seconds(10),
            ..hourly_params()
        };
        claim_eq!(
            short_half_life.validate(now, &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );

        let long_half_life = AuctionParameters {
            price_decay_half_life: Duration::from_seconds(3601),
            ..hourly_params()
        };
        claim_eq!(
            long_half_life.validate(now, &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );

        let zero_timeout = AuctionParameters {
            finalization_timeout: Some(Duration::from_millis(0)),
            ..hourly_params()
        };
        claim_eq!(
            zero_timeout.validate(now, &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );

        // Start must be in the future
        claim_eq!(
            hourly_params().validate(at(0), &range),
            Err(CustomContractError::InvalidAuctionParameters)
        );
    }

    #[concordium_test]
    fn test_half_life_range() {
        claim_eq!(HalfLifeRange::default().validate(), Ok(()));
        claim_eq!(
            HalfLifeRange {
                min: Duration::from_seconds(0),
                max: Duration::from_seconds(10),
            }
            .validate(),
            Err(CustomContractError::InvalidAuctionParameters)
        );
        claim_eq!(
            HalfLifeRange {
                min: Duration::from_seconds(20),
                max: Duration::from_seconds(10),
            }
            .validate(),
            Err(CustomContractError::InvalidAuctionParameters)
        );
    }
}

use super::*;

use core::ops::Mul;

/// Percentage with micro-percent precision. `Percentage::from_percent(100)` is the whole amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, SchemaType)]
pub struct Percentage(u64);

impl Percentage {
    pub const fn from_micro_percent(micro_percent: u64) -> Self {
        Self(micro_percent)
    }

    pub const fn from_percent(percent: u64) -> Self {
        Self(percent * 1_000_000)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl Mul<Amount> for Percentage {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Self::Output {
        Amount::from_micro_ccd((rhs.micro_ccd as u128 * self.0 as u128 / 100_000_000) as u64)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_share_of_amount() {
        claim_eq!(
            Percentage::from_percent(10) * Amount::from_ccd(50),
            Amount::from_ccd(5)
        );
        claim_eq!(
            Percentage::from_micro_percent(2_500_000) * Amount::from_micro_ccd(1_000),
            Amount::from_micro_ccd(25)
        );
        // Fractions of a micro CCD are dropped
        claim_eq!(
            Percentage::from_percent(33) * Amount::from_micro_ccd(10),
            Amount::from_micro_ccd(3)
        );
    }

    #[concordium_test]
    fn test_checked_add() {
        claim_eq!(
            Percentage::from_percent(10).checked_add(Percentage::from_percent(15)),
            Some(Percentage::from_percent(25))
        );
        claim_eq!(
            Percentage::from_micro_percent(u64::MAX).checked_add(Percentage::from_percent(1)),
            None
        );
    }
}

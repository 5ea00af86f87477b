use super::*;

/// Primary sale revenue recipients of a project, as reported by the core contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct SplitRecipients {
    /// Project artist. Receives whatever is left after the other shares.
    pub artist: AccountAddress,
    /// Platform account.
    pub platform: AccountAddress,
    /// Platform share of the revenue.
    pub platform_share: Percentage,
    /// Render provider account.
    pub render_provider: AccountAddress,
    /// Render provider share of the revenue.
    pub render_provider_share: Percentage,
}

/// Revenue split into payouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueShares {
    pub artist: Amount,
    pub platform: Amount,
    pub render_provider: Amount,
}

impl SplitRecipients {
    pub fn is_artist(&self, address: &Address) -> bool {
        address.matches_account(&self.artist)
    }

    /// Split `revenue` between the recipients. The artist share absorbs rounding.
    pub fn shares(&self, revenue: Amount) -> Result<RevenueShares, CustomContractError> {
        let total = self
            .platform_share
            .checked_add(self.render_provider_share)
            .ok_or(CustomContractError::InvalidSplits)?;
        ensure!(
            total <= Percentage::from_percent(100),
            CustomContractError::InvalidSplits
        );

        let platform = self.platform_share * revenue;
        let render_provider = self.render_provider_share * revenue;
        let artist = revenue
            .micro_ccd
            .checked_sub(platform.micro_ccd)
            .and_then(|rest| rest.checked_sub(render_provider.micro_ccd))
            .ok_or(CustomContractError::AccountingInvariantViolated)?;

        Ok(RevenueShares {
            artist: Amount::from_micro_ccd(artist),
            platform,
            render_provider,
        })
    }
}

impl RevenueShares {
    /// Non-zero payouts in transfer order.
    pub fn payouts(&self, recipients: &SplitRecipients) -> Vec<(AccountAddress, Amount)> {
        [
            (recipients.platform, self.platform),
            (recipients.render_provider, self.render_provider),
            (recipients.artist, self.artist),
        ]
        .iter()
        .filter(|(_, amount)| *amount > Amount::zero())
        .copied()
        .collect()
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const ARTIST: AccountAddress = AccountAddress([1; 32]);
    const PLATFORM: AccountAddress = AccountAddress([2; 32]);
    const RENDER_PROVIDER: AccountAddress = AccountAddress([3; 32]);

    fn recipients(platform: u64, render_provider: u64) -> SplitRecipients {
        SplitRecipients {
            artist: ARTIST,
            platform: PLATFORM,
            platform_share: Percentage::from_percent(platform),
            render_provider: RENDER_PROVIDER,
            render_provider_share: Percentage::from_percent(render_provider),
        }
    }

    #[concordium_test]
    fn test_shares() {
        let shares = recipients(10, 5)
            .shares(Amount::from_ccd(100))
            .expect_report("Valid splits");

        claim_eq!(
            shares,
            RevenueShares {
                artist: Amount::from_ccd(85),
                platform: Amount::from_ccd(10),
                render_provider: Amount::from_ccd(5),
            }
        );
    }

    #[concordium_test]
    fn test_shares_rounding_goes_to_artist() {
        let shares = recipients(33, 33)
            .shares(Amount::from_micro_ccd(10))
            .expect_report("Valid splits");

        claim_eq!(shares.platform, Amount::from_micro_ccd(3));
        claim_eq!(shares.render_provider, Amount::from_micro_ccd(3));
        claim_eq!(shares.artist, Amount::from_micro_ccd(4));
    }

    #[concordium_test]
    fn test_shares_over_hundred_percent() {
        claim_eq!(
            recipients(60, 41).shares(Amount::from_ccd(1)),
            Err(CustomContractError::InvalidSplits)
        );
    }

    #[concordium_test]
    fn test_payouts_skip_zero_shares() {
        let recipients = recipients(10, 0);
        let shares = recipients
            .shares(Amount::from_ccd(10))
            .expect_report("Valid splits");

        claim_eq!(
            shares.payouts(&recipients),
            vec![(PLATFORM, Amount::from_ccd(1)), (ARTIST, Amount::from_ccd(9))]
        );
    }

    #[concordium_test]
    fn test_is_artist() {
        let recipients = recipients(10, 5);
        claim!(recipients.is_artist(&Address::Account(ARTIST)));
        claim!(!recipients.is_artist(&Address::Account(PLATFORM)));
        claim!(!recipients.is_artist(&Address::Contract(ContractAddress {
            index: 1,
            subindex: 0
        })));
    }
}

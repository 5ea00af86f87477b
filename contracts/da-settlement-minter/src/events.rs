use commons::{
    ContractTokenId, ProjectId, AUCTION_CONFIGURED_TAG, AUCTION_FINALIZED_TAG, AUCTION_RESET_TAG,
    EXCESS_RECLAIMED_TAG, HALF_LIFE_RANGE_TAG, PURCHASE_RECORDED_TAG,
};
use concordium_std::*;

use crate::clock::{AuctionParameters, HalfLifeRange};
use crate::ledger::PurchaseReceipt;

/// Auction configuration event data.
#[derive(Debug, Serial)]
pub struct AuctionConfiguredEvent<'a> {
    pub project_id: ProjectId,
    pub cycle: u32,
    pub params: &'a AuctionParameters,
}

/// Purchase event data.
#[derive(Debug, Serial)]
pub struct PurchaseRecordedEvent<'a> {
    pub project_id: ProjectId,
    pub cycle: u32,
    /// Account the receipt belongs to.
    pub purchaser: &'a AccountAddress,
    /// Owner of the minted token.
    pub to: &'a AccountAddress,
    /// Minted token identifier.
    pub token_id: &'a ContractTokenId,
    /// Auction price at the time of purchase.
    pub price: Amount,
    /// Amount sent with the purchase.
    pub amount_paid: Amount,
    /// Purchaser receipt after the purchase.
    pub receipt: PurchaseReceipt,
}

/// Auction settlement event data.
#[derive(Debug, Serial)]
pub struct AuctionFinalizedEvent {
    pub project_id: ProjectId,
    pub cycle: u32,
    pub settled_price: Amount,
    pub num_purchased: u32,
    /// Revenue distributed to the split recipients.
    pub revenue: Amount,
}

/// Excess funds payout event data.
#[derive(Debug, Serial)]
pub struct ExcessReclaimedEvent<'a> {
    pub project_id: ProjectId,
    pub cycle: u32,
    pub purchaser: &'a AccountAddress,
    /// Payout receiver.
    pub to: &'a AccountAddress,
    pub amount: Amount,
}

/// Auction reset event data.
#[derive(Debug, Serial)]
pub struct AuctionResetEvent {
    pub project_id: ProjectId,
    /// Cycle the project moved to.
    pub cycle: u32,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum MinterEvent<'a> {
    AuctionConfigured(AuctionConfiguredEvent<'a>),
    PurchaseRecorded(PurchaseRecordedEvent<'a>),
    AuctionFinalized(AuctionFinalizedEvent),
    ExcessReclaimed(ExcessReclaimedEvent<'a>),
    AuctionReset(AuctionResetEvent),
    HalfLifeRangeUpdated(&'a HalfLifeRange),
}

impl<'a> MinterEvent<'a> {
    pub fn configured(project_id: ProjectId, cycle: u32, params: &'a AuctionParameters) -> Self {
        Self::AuctionConfigured(AuctionConfiguredEvent {
            project_id,
            cycle,
            params,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn purchased(
        project_id: ProjectId,
        cycle: u32,
        purchaser: &'a AccountAddress,
        to: &'a AccountAddress,
        token_id: &'a ContractTokenId,
        price: Amount,
        amount_paid: Amount,
        receipt: PurchaseReceipt,
    ) -> Self {
        Self::PurchaseRecorded(PurchaseRecordedEvent {
            project_id,
            cycle,
            purchaser,
            to,
            token_id,
            price,
            amount_paid,
            receipt,
        })
    }

    pub fn finalized(
        project_id: ProjectId,
        cycle: u32,
        settled_price: Amount,
        num_purchased: u32,
        revenue: Amount,
    ) -> Self {
        Self::AuctionFinalized(AuctionFinalizedEvent {
            project_id,
            cycle,
            settled_price,
            num_purchased,
            revenue,
        })
    }

    pub fn reclaimed(
        project_id: ProjectId,
        cycle: u32,
        purchaser: &'a AccountAddress,
        to: &'a AccountAddress,
        amount: Amount,
    ) -> Self {
        Self::ExcessReclaimed(ExcessReclaimedEvent {
            project_id,
            cycle,
            purchaser,
            to,
            amount,
        })
    }

    pub fn reset(project_id: ProjectId, cycle: u32) -> Self {
        Self::AuctionReset(AuctionResetEvent { project_id, cycle })
    }
}

impl<'a> Serial for MinterEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MinterEvent::AuctionConfigured(event) => {
                out.write_u8(AUCTION_CONFIGURED_TAG)?;
                event.serial(out)
            }
            MinterEvent::PurchaseRecorded(event) => {
                out.write_u8(PURCHASE_RECORDED_TAG)?;
                event.serial(out)
            }
            MinterEvent::AuctionFinalized(event) => {
                out.write_u8(AUCTION_FINALIZED_TAG)?;
                event.serial(out)
            }
            MinterEvent::ExcessReclaimed(event) => {
                out.write_u8(EXCESS_RECLAIMED_TAG)?;
                event.serial(out)
            }
            MinterEvent::AuctionReset(event) => {
                out.write_u8(AUCTION_RESET_TAG)?;
                event.serial(out)
            }
            MinterEvent::HalfLifeRangeUpdated(range) => {
                out.write_u8(HALF_LIFE_RANGE_TAG)?;
                range.serial(out)
            }
        }
    }
}

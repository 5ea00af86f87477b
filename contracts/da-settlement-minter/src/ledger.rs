use commons::{CustomContractError, ProjectId};
use concordium_std::*;

/// Receipts are scoped to an auction cycle, so a reset project starts with a
/// clean ledger while older receipts stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct ReceiptKey {
    pub project_id: ProjectId,
    pub cycle: u32,
    pub purchaser: AccountAddress,
}

/// Purchaser funds held in escrow for one auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct PurchaseReceipt {
    /// Sum of all payments for the auction.
    pub total_paid: Amount,
    /// Number of tokens bought in the auction.
    pub tokens_purchased: u32,
    /// Excess funds were paid out.
    pub has_reclaimed: bool,
}

impl PurchaseReceipt {
    fn empty() -> Self {
        Self {
            total_paid: Amount::zero(),
            tokens_purchased: 0,
            has_reclaimed: false,
        }
    }

    /// Cost of the purchased tokens at `price`.
    pub fn cost_at(&self, price: Amount) -> Result<Amount, CustomContractError> {
        price
            .micro_ccd
            .checked_mul(u64::from(self.tokens_purchased))
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::AccountingInvariantViolated)
    }

    /// Payments above the cost of the purchased tokens at the settled price.
    pub fn owed(&self, settled_price: Amount) -> Result<Amount, CustomContractError> {
        let cost = self.cost_at(settled_price)?;
        self.total_paid
            .micro_ccd
            .checked_sub(cost.micro_ccd)
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::AccountingInvariantViolated)
    }

    /// Estimate of the excess at `price`, zero if the receipt does not cover it.
    pub fn excess_over(&self, price: Amount) -> Amount {
        self.owed(price).unwrap_or_else(|_| Amount::zero())
    }
}

#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Ledger<S: HasStateApi> {
    receipts: StateMap<ReceiptKey, PurchaseReceipt, S>,
}

impl<S: HasStateApi> Ledger<S> {
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            receipts: state_builder.new_map(),
        }
    }

    pub fn receipt(&self, key: &ReceiptKey) -> Option<PurchaseReceipt> {
        self.receipts.get(key).map(|receipt| *receipt)
    }

    /// Add a purchase of one token at `price` paid with `amount` to the
    /// purchaser receipt. Returns the updated receipt and whether it was new.
    pub fn record(
        &mut self,
        key: ReceiptKey,
        amount: Amount,
        price: Amount,
    ) -> Result<(PurchaseReceipt, bool), CustomContractError> {
        ensure!(amount >= price, CustomContractError::InsufficientPayment);

        let previous = self.receipt(&key);
        let created = previous.is_none();
        let mut receipt = previous.unwrap_or_else(PurchaseReceipt::empty);
        ensure!(
            !receipt.has_reclaimed,
            CustomContractError::AccountingInvariantViolated
        );

        receipt.total_paid = receipt
            .total_paid
            .micro_ccd
            .checked_add(amount.micro_ccd)
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::AccountingInvariantViolated)?;
        receipt.tokens_purchased = receipt
            .tokens_purchased
            .checked_add(1)
            .ok_or(CustomContractError::AccountingInvariantViolated)?;

        self.receipts.insert(key, receipt);
        Ok((receipt, created))
    }

    /// Excess owed to the purchaser. The auction must be settled.
    pub fn compute_owed(
        &self,
        key: &ReceiptKey,
        settled_price: Option<Amount>,
    ) -> Result<Amount, CustomContractError> {
        let settled_price = settled_price.ok_or(CustomContractError::AuctionNotFinalized)?;
        let receipt = self.receipt(key).ok_or(CustomContractError::NoReceipt)?;
        ensure!(
            !receipt.has_reclaimed,
            CustomContractError::AlreadyReclaimed
        );
        receipt.owed(settled_price)
    }

    /// Mark the receipt as reclaimed and return the amount to pay out. A zero
    /// excess still closes the receipt.
    pub fn mark_reclaimed(
        &mut self,
        key: &ReceiptKey,
        settled_price: Option<Amount>,
    ) -> Result<Amount, CustomContractError> {
        let owed = self.compute_owed(key, settled_price)?;
        let mut receipt = self
            .receipts
            .get_mut(key)
            .ok_or(CustomContractError::NoReceipt)?;
        receipt.has_reclaimed = true;
        Ok(owed)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const COLLECTOR: AccountAddress = AccountAddress([16; 32]);
    const OTHER_COLLECTOR: AccountAddress = AccountAddress([17; 32]);

    fn key(purchaser: AccountAddress) -> ReceiptKey {
        ReceiptKey {
            project_id: 7,
            cycle: 0,
            purchaser,
        }
    }

    fn new_ledger() -> Ledger<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        Ledger::new(&mut state_builder)
    }

    #[concordium_test]
    fn test_record_accumulates() {
        let mut ledger = new_ledger();

        let (receipt, created) = ledger
            .record(key(COLLECTOR), Amount::from_ccd(1), Amount::from_ccd(1))
            .expect_report("Payment covers the price");
        claim!(created);
        claim_eq!(receipt.total_paid, Amount::from_ccd(1));

        let (receipt, created) = ledger
            .record(
                key(COLLECTOR),
                Amount::from_micro_ccd(600_000),
                Amount::from_micro_ccd(500_000),
            )
            .expect_report("Payment covers the price");
        claim!(!created);
        claim_eq!(
            receipt,
            PurchaseReceipt {
                total_paid: Amount::from_micro_ccd(1_600_000),
                tokens_purchased: 2,
                has_reclaimed: false,
            }
        );
        claim_eq!(ledger.receipt(&key(OTHER_COLLECTOR)), None);
    }

    #[concordium_test]
    fn test_record_underpayment() {
        let mut ledger = new_ledger();

        claim_eq!(
            ledger.record(
                key(COLLECTOR),
                Amount::from_micro_ccd(999_999),
                Amount::from_ccd(1)
            ),
            Err(CustomContractError::InsufficientPayment)
        );
        claim_eq!(ledger.receipt(&key(COLLECTOR)), None);
    }

    #[concordium_test]
    fn test_receipts_are_scoped_by_cycle() {
        let mut ledger = new_ledger();
        let next_cycle = ReceiptKey {
            cycle: 1,
            ..key(COLLECTOR)
        };

        ledger
            .record(key(COLLECTOR), Amount::from_ccd(1), Amount::from_ccd(1))
            .expect_report("Payment covers the price");

        claim_eq!(ledger.receipt(&next_cycle), None);
    }

    #[concordium_test]
    fn test_owed_after_settlement() {
        let mut ledger = new_ledger();
        ledger
            .record(key(COLLECTOR), Amount::from_ccd(1), Amount::from_ccd(1))
            .expect_report("Payment covers the price");

        claim_eq!(
            ledger.compute_owed(&key(COLLECTOR), None),
            Err(CustomContractError::AuctionNotFinalized)
        );
        claim_eq!(
            ledger.compute_owed(&key(COLLECTOR), Some(Amount::from_micro_ccd(500_000))),
            Ok(Amount::from_micro_ccd(500_000))
        );
        claim_eq!(
            ledger.compute_owed(&key(OTHER_COLLECTOR), Some(Amount::from_micro_ccd(500_000))),
            Err(CustomContractError::NoReceipt)
        );
    }

    #[concordium_test]
    fn test_mark_reclaimed_once() {
        let mut ledger = new_ledger();
        ledger
            .record(key(COLLECTOR), Amount::from_ccd(1), Amount::from_ccd(1))
            .expect_report("Payment covers the price");
        let settled = Some(Amount::from_micro_ccd(250_000));

        claim_eq!(
            ledger.mark_reclaimed(&key(COLLECTOR), settled),
            Ok(Amount::from_micro_ccd(750_000))
        );
        claim_eq!(
            ledger.mark_reclaimed(&key(COLLECTOR), settled),
            Err(CustomContractError::AlreadyReclaimed)
        );
        claim!(
            ledger
                .receipt(&key(COLLECTOR))
                .map(|receipt| receipt.has_reclaimed)
                .unwrap_or(false)
        );
    }

    #[concordium_test]
    fn test_zero_excess_closes_receipt() {
        let mut ledger = new_ledger();
        ledger
            .record(key(COLLECTOR), Amount::from_ccd(1), Amount::from_ccd(1))
            .expect_report("Payment covers the price");

        claim_eq!(
            ledger.mark_reclaimed(&key(COLLECTOR), Some(Amount::from_ccd(1))),
            Ok(Amount::zero())
        );
        claim_eq!(
            ledger.mark_reclaimed(&key(COLLECTOR), Some(Amount::from_ccd(1))),
            Err(CustomContractError::AlreadyReclaimed)
        );
    }

    #[concordium_test]
    fn test_settled_above_paid_is_rejected() {
        let receipt = PurchaseReceipt {
            total_paid: Amount::from_ccd(1),
            tokens_purchased: 2,
            has_reclaimed: false,
        };

        claim_eq!(
            receipt.owed(Amount::from_ccd(1)),
            Err(CustomContractError::AccountingInvariantViolated)
        );
        claim_eq!(receipt.excess_over(Amount::from_ccd(1)), Amount::zero());
        claim_eq!(
            receipt.excess_over(Amount::from_micro_ccd(400_000)),
            Amount::from_micro_ccd(200_000)
        );
    }
}

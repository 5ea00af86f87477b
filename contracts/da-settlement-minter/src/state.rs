use commons::{Authority, CustomContractError, ProjectId};
use concordium_std::*;

use crate::clock::{AuctionParameters, HalfLifeRange, Pricing};
use crate::ledger::{Ledger, PurchaseReceipt, ReceiptKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum AuctionPhase {
    /// No auction parameters for the current cycle.
    Unconfigured,
    /// Parameters are set, start time not reached.
    Configured,
    /// Accepting purchases.
    Active,
    /// Settled price is fixed and excess funds can be reclaimed.
    Finalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct LatestPurchase {
    pub timestamp: Timestamp,
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionState {
    /// Price every purchaser ends up paying. Set on finalization.
    pub settled_price: Option<Amount>,
    /// Tokens sold in the auction.
    pub num_purchased: u32,
    pub latest_purchase: Option<LatestPurchase>,
    /// Receipts not reclaimed yet.
    pub outstanding_receipts: u32,
}

impl AuctionState {
    fn new() -> Self {
        Self {
            settled_price: None,
            num_purchased: 0,
            latest_purchase: None,
            outstanding_receipts: 0,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.settled_price.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct ProjectAuction {
    pub params: AuctionParameters,
    pub state: AuctionState,
}

impl ProjectAuction {
    fn new(params: AuctionParameters) -> Self {
        Self {
            params,
            state: AuctionState::new(),
        }
    }

    pub fn phase(&self, now: Timestamp) -> AuctionPhase {
        if self.state.is_finalized() {
            AuctionPhase::Finalized
        } else if now < self.params.start {
            AuctionPhase::Configured
        } else {
            AuctionPhase::Active
        }
    }

    /// Point in time after which no purchases are accepted.
    pub fn deadline(&self) -> Option<Timestamp> {
        let timeout = self.params.finalization_timeout?;
        let since = self
            .state
            .latest_purchase
            .map(|purchase| purchase.timestamp)
            .unwrap_or(self.params.start);
        Some(
            since
                .checked_add(timeout)
                .unwrap_or_else(|| Timestamp::from_timestamp_millis(u64::MAX)),
        )
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.deadline().map(|deadline| now > deadline).unwrap_or(false)
    }

    /// Price the auction settles at when finalized at `now`. An expired
    /// auction settles at the price of its deadline.
    pub fn clearing_price(&self, now: Timestamp) -> Result<Amount, CustomContractError> {
        let at = match self.deadline() {
            Some(deadline) if deadline < now => deadline,
            _ => now,
        };
        self.params.price_at(at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, SchemaType)]
pub struct Project {
    /// Auction cycle, bumped by every reset.
    pub cycle: u32,
    /// Tokens minted through this minter.
    pub invocations: u32,
    pub auction: Option<ProjectAuction>,
}

impl Project {
    pub fn phase(&self, now: Timestamp) -> AuctionPhase {
        self.auction
            .as_ref()
            .map(|auction| auction.phase(now))
            .unwrap_or(AuctionPhase::Unconfigured)
    }

    fn receipt_key(&self, project_id: ProjectId, purchaser: AccountAddress) -> ReceiptKey {
        ReceiptKey {
            project_id,
            cycle: self.cycle,
            purchaser,
        }
    }
}

/// Revenue to distribute once an auction settles.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub cycle: u32,
    pub settled_price: Amount,
    pub num_purchased: u32,
}

impl Settlement {
    pub fn revenue(&self) -> Result<Amount, CustomContractError> {
        self.settled_price
            .micro_ccd
            .checked_mul(u64::from(self.num_purchased))
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::AccountingInvariantViolated)
    }
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub cycle: u32,
    pub price: Amount,
    pub receipt: PurchaseReceipt,
    /// Present when the purchase sold out the project.
    pub settlement: Option<Settlement>,
}

/// Excess to pay out for one project.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reclaimed {
    pub project_id: ProjectId,
    pub cycle: u32,
    pub amount: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Authority module for administrative rights management.
    pub authority: Authority<S>,
    /// Core token contract minting project tokens.
    pub core: ContractAddress,
    /// Minter filter deciding which minter serves which project.
    pub minter_filter: ContractAddress,
    /// Allowed price decay half-life for new auctions.
    pub half_life_range: HalfLifeRange,
    pub projects: StateMap<ProjectId, Project, S>,
    /// Purchase receipts of all projects and cycles.
    pub ledger: Ledger<S>,
}

impl<S: HasStateApi> State<S> {
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        origin: AccountAddress,
        core: ContractAddress,
        minter_filter: ContractAddress,
    ) -> Self {
        State {
            authority: Authority::new(state_builder, Address::Account(origin)),
            core,
            minter_filter,
            half_life_range: HalfLifeRange::default(),
            projects: state_builder.new_map(),
            ledger: Ledger::new(state_builder),
        }
    }

    pub fn project(&self, project_id: ProjectId) -> Project {
        self.projects
            .get(&project_id)
            .map(|project| (*project).clone())
            .unwrap_or_default()
    }

    pub fn receipt(
        &self,
        project_id: ProjectId,
        purchaser: AccountAddress,
    ) -> Option<PurchaseReceipt> {
        let key = self.project(project_id).receipt_key(project_id, purchaser);
        self.ledger.receipt(&key)
    }

    pub fn set_half_life_range(&mut self, range: HalfLifeRange) -> Result<(), CustomContractError> {
        range.validate()?;
        self.half_life_range = range;
        Ok(())
    }

    /// Set auction parameters for the current cycle. Returns the cycle.
    pub fn configure(
        &mut self,
        project_id: ProjectId,
        params: AuctionParameters,
        now: Timestamp,
    ) -> Result<u32, CustomContractError> {
        let mut project = self.project(project_id);
        match project.phase(now) {
            AuctionPhase::Unconfigured | AuctionPhase::Configured => {}
            AuctionPhase::Active => bail!(CustomContractError::AuctionAlreadyStarted),
            AuctionPhase::Finalized => bail!(CustomContractError::AlreadyFinalized),
        }
        params.validate(now, &self.half_life_range)?;

        project.auction = Some(ProjectAuction::new(params));
        let cycle = project.cycle;
        self.projects.insert(project_id, project);
        Ok(cycle)
    }

    /// Current price of the project auction. A finalized auction reports its
    /// settled price, an expired one the price it will settle at.
    pub fn current_price(
        &self,
        project_id: ProjectId,
        now: Timestamp,
    ) -> Result<Amount, CustomContractError> {
        let project = self.project(project_id);
        let auction = project
            .auction
            .as_ref()
            .ok_or(CustomContractError::AuctionNotConfigured)?;
        match auction.state.settled_price {
            Some(settled_price) => Ok(settled_price),
            None => auction.clearing_price(now),
        }
    }

    /// Record a purchase of one token. `max_invocations` is the project cap
    /// reported by the core contract.
    pub fn purchase(
        &mut self,
        project_id: ProjectId,
        purchaser: AccountAddress,
        amount: Amount,
        now: Timestamp,
        max_invocations: u32,
    ) -> Result<PurchaseOutcome, CustomContractError> {
        let mut project = self.project(project_id);
        let key = project.receipt_key(project_id, purchaser);
        let mut auction = project
            .auction
            .take()
            .ok_or(CustomContractError::AuctionNotConfigured)?;

        match auction.phase(now) {
            AuctionPhase::Active => {}
            AuctionPhase::Unconfigured => bail!(CustomContractError::AuctionNotConfigured),
            AuctionPhase::Configured => bail!(CustomContractError::AuctionNotStarted),
            AuctionPhase::Finalized => bail!(CustomContractError::AlreadyFinalized),
        }
        ensure!(!auction.is_expired(now), CustomContractError::AuctionExpired);
        ensure!(
            project.invocations < max_invocations,
            CustomContractError::MaxInvocationsReached
        );

        let price = auction.params.price_at(now)?;
        let (receipt, created) = self.ledger.record(key, amount, price)?;

        project.invocations += 1;
        auction.state.num_purchased = auction
            .state
            .num_purchased
            .checked_add(1)
            .ok_or(CustomContractError::AccountingInvariantViolated)?;
        auction.state.latest_purchase = Some(LatestPurchase {
            timestamp: now,
            price,
        });
        if created {
            auction.state.outstanding_receipts += 1;
        }

        // Selling out settles the auction at the last purchase price
        let settlement = if project.invocations >= max_invocations {
            auction.state.settled_price = Some(price);
            Some(Settlement {
                cycle: project.cycle,
                settled_price: price,
                num_purchased: auction.state.num_purchased,
            })
        } else {
            None
        };

        let cycle = project.cycle;
        project.auction = Some(auction);
        self.projects.insert(project_id, project);

        Ok(PurchaseOutcome {
            cycle,
            price,
            receipt,
            settlement,
        })
    }

    /// Fix the settled price. Before the finalization deadline only a
    /// `privileged` sender may finalize.
    pub fn finalize(
        &mut self,
        project_id: ProjectId,
        now: Timestamp,
        privileged: bool,
    ) -> Result<Settlement, CustomContractError> {
        let mut project = self.project(project_id);
        let mut auction = project
            .auction
            .take()
            .ok_or(CustomContractError::AuctionNotConfigured)?;

        match auction.phase(now) {
            AuctionPhase::Active => {}
            AuctionPhase::Unconfigured => bail!(CustomContractError::AuctionNotConfigured),
            AuctionPhase::Configured => bail!(CustomContractError::AuctionNotStarted),
            AuctionPhase::Finalized => bail!(CustomContractError::AlreadyFinalized),
        }
        ensure!(
            privileged || auction.is_expired(now),
            CustomContractError::Unauthorized
        );

        let settled_price = auction.clearing_price(now)?;
        auction.state.settled_price = Some(settled_price);
        let settlement = Settlement {
            cycle: project.cycle,
            settled_price,
            num_purchased: auction.state.num_purchased,
        };

        project.auction = Some(auction);
        self.projects.insert(project_id, project);
        Ok(settlement)
    }

    /// Close the purchaser receipts of every listed project. Nothing changes
    /// unless all of them can be reclaimed.
    pub fn reclaim(
        &mut self,
        project_ids: &[ProjectId],
        purchaser: AccountAddress,
    ) -> Result<Vec<Reclaimed>, CustomContractError> {
        ensure!(
            !project_ids.is_empty(),
            CustomContractError::OperationNotPermitted
        );
        for (i, project_id) in project_ids.iter().enumerate() {
            ensure!(
                !project_ids[..i].contains(project_id),
                CustomContractError::AlreadyReclaimed
            );
            let project = self.project(*project_id);
            let auction = project
                .auction
                .as_ref()
                .ok_or(CustomContractError::AuctionNotConfigured)?;
            self.ledger.compute_owed(
                &project.receipt_key(*project_id, purchaser),
                auction.state.settled_price,
            )?;
        }

        let mut reclaimed = Vec::with_capacity(project_ids.len());
        for project_id in project_ids.iter().copied() {
            let mut project = self.project(project_id);
            let key = project.receipt_key(project_id, purchaser);
            let auction = project
                .auction
                .as_mut()
                .ok_or(CustomContractError::AuctionNotConfigured)?;

            let amount = self
                .ledger
                .mark_reclaimed(&key, auction.state.settled_price)?;
            auction.state.outstanding_receipts = auction
                .state
                .outstanding_receipts
                .checked_sub(1)
                .ok_or(CustomContractError::AccountingInvariantViolated)?;

            reclaimed.push(Reclaimed {
                project_id,
                cycle: project.cycle,
                amount,
            });
            self.projects.insert(project_id, project);
        }
        Ok(reclaimed)
    }

    /// Clear the auction and start a new cycle. Only allowed when nobody
    /// purchased yet, or after settlement once all funds were reclaimed.
    /// Returns the new cycle.
    pub fn reset(&mut self, project_id: ProjectId) -> Result<u32, CustomContractError> {
        let mut project = self.project(project_id);
        let auction = project
            .auction
            .as_ref()
            .ok_or(CustomContractError::AuctionNotConfigured)?;

        let untouched = auction.state.num_purchased == 0;
        let settled = auction.state.is_finalized() && auction.state.outstanding_receipts == 0;
        ensure!(
            untouched || settled,
            CustomContractError::OperationNotPermitted
        );

        project.cycle = project
            .cycle
            .checked_add(1)
            .ok_or(CustomContractError::AccountingInvariantViolated)?;
        project.auction = None;
        let cycle = project.cycle;
        self.projects.insert(project_id, project);
        Ok(cycle)
    }

    /// Excess the purchaser can reclaim, or would reclaim if the auction
    /// settled at the current price.
    pub fn excess_funds(
        &self,
        project_id: ProjectId,
        purchaser: AccountAddress,
        now: Timestamp,
    ) -> Result<Amount, CustomContractError> {
        let project = self.project(project_id);
        let auction = project
            .auction
            .as_ref()
            .ok_or(CustomContractError::AuctionNotConfigured)?;
        let receipt = self
            .ledger
            .receipt(&project.receipt_key(project_id, purchaser))
            .ok_or(CustomContractError::NoReceipt)?;

        if receipt.has_reclaimed {
            return Ok(Amount::zero());
        }
        match auction.state.settled_price {
            Some(settled_price) => receipt.owed(settled_price),
            None => Ok(receipt.excess_over(auction.clearing_price(now)?)),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const COLLECTOR: AccountAddress = AccountAddress([16; 32]);
    const OTHER_COLLECTOR: AccountAddress = AccountAddress([17; 32]);
    const CORE: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const FILTER: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const PROJECT: ProjectId = 3;
    const HOUR_MILLIS: u64 = 3_600_000;
    const START_MILLIS: u64 = 1_000_000_000;

    fn at(offset_millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS + offset_millis)
    }

    fn before_start() -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS - 1)
    }

    fn params(timeout: Option<Duration>) -> AuctionParameters {
        AuctionParameters {
            start: at(0),
            price_decay_half_life: Duration::from_seconds(3600),
            starting_price: Amount::from_ccd(1),
            base_price: Amount::from_micro_ccd(100_000),
            finalization_timeout: timeout,
        }
    }

    fn new_state() -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        State::new(&mut state_builder, ADMIN, CORE, FILTER)
    }

    fn configured_state() -> State<TestStateApi> {
        let mut state = new_state();
        state
            .configure(PROJECT, params(None), before_start())
            .expect_report("Valid auction parameters");
        state
    }

    #[concordium_test]
    fn test_phases() {
        let mut state = new_state();
        claim_eq!(state.project(PROJECT).phase(at(0)), AuctionPhase::Unconfigured);

        state
            .configure(PROJECT, params(None), before_start())
            .expect_report("Valid auction parameters");
        let project = state.project(PROJECT);
        claim_eq!(project.phase(before_start()), AuctionPhase::Configured);
        claim_eq!(project.phase(at(0)), AuctionPhase::Active);

        state
            .finalize(PROJECT, at(1), true)
            .expect_report("Active auction");
        claim_eq!(state.project(PROJECT).phase(at(1)), AuctionPhase::Finalized);
    }

    #[concordium_test]
    fn test_reconfigure_before_start_only() {
        let mut state = configured_state();

        let cheaper = AuctionParameters {
            starting_price: Amount::from_micro_ccd(500_000),
            ..params(None)
        };
        claim_eq!(state.configure(PROJECT, cheaper.clone(), before_start()), Ok(0));
        claim_eq!(
            state.project(PROJECT).auction.map(|auction| auction.params),
            Some(cheaper.clone())
        );

        claim_eq!(
            state.configure(PROJECT, cheaper, at(0)),
            Err(CustomContractError::AuctionAlreadyStarted)
        );
    }

    #[concordium_test]
    fn test_purchase_before_start() {
        let mut state = configured_state();

        claim_eq!(
            state.purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), before_start(), 10),
            Err(CustomContractError::AuctionNotStarted)
        );
        claim_eq!(
            state.purchase(PROJECT + 1, COLLECTOR, Amount::from_ccd(1), at(0), 10),
            Err(CustomContractError::AuctionNotConfigured)
        );
    }

    #[concordium_test]
    fn test_purchase_records_receipt() {
        let mut state = configured_state();

        let outcome = state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(2), at(HOUR_MILLIS), 10)
            .expect_report("Active auction");

        claim_eq!(outcome.price, Amount::from_micro_ccd(500_000));
        claim_eq!(outcome.settlement, None);
        claim_eq!(outcome.receipt.total_paid, Amount::from_ccd(2));

        let project = state.project(PROJECT);
        claim_eq!(project.invocations, 1);
        let auction = project.auction.expect_report("Auction is configured");
        claim_eq!(auction.state.num_purchased, 1);
        claim_eq!(auction.state.outstanding_receipts, 1);
        claim_eq!(
            auction.state.latest_purchase,
            Some(LatestPurchase {
                timestamp: at(HOUR_MILLIS),
                price: Amount::from_micro_ccd(500_000),
            })
        );
    }

    #[concordium_test]
    fn test_underpayment_leaves_state_untouched() {
        let mut state = configured_state();

        claim_eq!(
            state.purchase(PROJECT, COLLECTOR, Amount::from_micro_ccd(999_999), at(0), 10),
            Err(CustomContractError::InsufficientPayment)
        );
        claim_eq!(state.project(PROJECT).invocations, 0);
        claim_eq!(state.receipt(PROJECT, COLLECTOR), None);
    }

    #[concordium_test]
    fn test_sellout_settles() {
        let mut state = configured_state();

        let first = state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 2)
            .expect_report("Active auction");
        claim_eq!(first.settlement, None);

        let last = state
            .purchase(PROJECT, OTHER_COLLECTOR, Amount::from_ccd(1), at(HOUR_MILLIS), 2)
            .expect_report("Active auction");
        let settlement = last.settlement.expect_report("Last token settles the auction");
        claim_eq!(settlement.settled_price, Amount::from_micro_ccd(500_000));
        claim_eq!(settlement.num_purchased, 2);
        claim_eq!(settlement.revenue(), Ok(Amount::from_ccd(1)));

        claim_eq!(
            state.purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(HOUR_MILLIS), 3),
            Err(CustomContractError::AlreadyFinalized)
        );
    }

    #[concordium_test]
    fn test_max_invocations() {
        let mut state = configured_state();

        claim_eq!(
            state.purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 0),
            Err(CustomContractError::MaxInvocationsReached)
        );
    }

    #[concordium_test]
    fn test_finalize_requires_privilege_before_deadline() {
        let mut state = new_state();
        state
            .configure(PROJECT, params(Some(Duration::from_seconds(7200))), before_start())
            .expect_report("Valid auction parameters");

        claim_eq!(
            state.finalize(PROJECT, at(HOUR_MILLIS), false),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.finalize(PROJECT, before_start(), true),
            Err(CustomContractError::AuctionNotStarted)
        );

        let settlement = state
            .finalize(PROJECT, at(HOUR_MILLIS), true)
            .expect_report("Privileged finalization");
        claim_eq!(settlement.settled_price, Amount::from_micro_ccd(500_000));
        claim_eq!(
            state.finalize(PROJECT, at(HOUR_MILLIS), true),
            Err(CustomContractError::AlreadyFinalized)
        );
    }

    #[concordium_test]
    fn test_expired_auction() {
        let mut state = new_state();
        state
            .configure(PROJECT, params(Some(Duration::from_seconds(3600))), before_start())
            .expect_report("Valid auction parameters");
        state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 10)
            .expect_report("Active auction");

        // Deadline is measured from the latest purchase
        claim_eq!(
            state.purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(HOUR_MILLIS + 1), 10),
            Err(CustomContractError::AuctionExpired)
        );

        // Price stops decaying at the deadline
        claim_eq!(
            state.current_price(PROJECT, at(10 * HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(500_000))
        );

        // Anyone may finalize, the price is taken at the deadline
        let settlement = state
            .finalize(PROJECT, at(10 * HOUR_MILLIS), false)
            .expect_report("Expired auction");
        claim_eq!(settlement.settled_price, Amount::from_micro_ccd(500_000));
    }

    #[concordium_test]
    fn test_reclaim_after_settlement() {
        let mut state = configured_state();
        state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 10)
            .expect_report("Active auction");

        claim_eq!(
            state.reclaim(&[PROJECT], COLLECTOR),
            Err(CustomContractError::AuctionNotFinalized)
        );
        claim_eq!(
            state.excess_funds(PROJECT, COLLECTOR, at(HOUR_MILLIS)),
            Ok(Amount::from_micro_ccd(500_000))
        );

        state
            .finalize(PROJECT, at(HOUR_MILLIS), true)
            .expect_report("Privileged finalization");

        claim_eq!(
            state.reclaim(&[PROJECT], COLLECTOR),
            Ok(vec![Reclaimed {
                project_id: PROJECT,
                cycle: 0,
                amount: Amount::from_micro_ccd(500_000),
            }])
        );
        claim_eq!(
            state.excess_funds(PROJECT, COLLECTOR, at(HOUR_MILLIS)),
            Ok(Amount::zero())
        );
        claim_eq!(
            state.reclaim(&[PROJECT], COLLECTOR),
            Err(CustomContractError::AlreadyReclaimed)
        );
        claim_eq!(
            state
                .project(PROJECT)
                .auction
                .map(|auction| auction.state.outstanding_receipts),
            Some(0)
        );
    }

    #[concordium_test]
    fn test_reclaim_many_is_all_or_nothing() {
        let mut state = configured_state();
        state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 1)
            .expect_report("Active auction");

        // Second project has no auction, so the whole batch fails
        claim_eq!(
            state.reclaim(&[PROJECT, PROJECT + 1], COLLECTOR),
            Err(CustomContractError::AuctionNotConfigured)
        );
        claim_eq!(
            state.reclaim(&[PROJECT, PROJECT], COLLECTOR),
            Err(CustomContractError::AlreadyReclaimed)
        );
        claim_eq!(
            state.receipt(PROJECT, COLLECTOR).map(|receipt| receipt.has_reclaimed),
            Some(false)
        );
        claim_eq!(
            state.excess_funds(PROJECT, COLLECTOR, at(0)),
            Ok(Amount::zero())
        );
    }

    #[concordium_test]
    fn test_reset_rules() {
        let mut state = configured_state();

        // Untouched auction can be reset at any time
        claim_eq!(state.reset(PROJECT), Ok(1));
        claim_eq!(state.project(PROJECT).auction, None);
        claim_eq!(
            state.reset(PROJECT),
            Err(CustomContractError::AuctionNotConfigured)
        );

        state
            .configure(PROJECT, params(None), before_start())
            .expect_report("Valid auction parameters");
        state
            .purchase(PROJECT, COLLECTOR, Amount::from_ccd(1), at(0), 10)
            .expect_report("Active auction");
        claim_eq!(
            state.reset(PROJECT),
            Err(CustomContractError::OperationNotPermitted)
        );

        state
            .finalize(PROJECT, at(HOUR_MILLIS), true)
            .expect_report("Privileged finalization");
        claim_eq!(
            state.reset(PROJECT),
            Err(CustomContractError::OperationNotPermitted)
        );

        state
            .reclaim(&[PROJECT], COLLECTOR)
            .expect_report("Settled auction");
        claim_eq!(state.reset(PROJECT), Ok(2));

        // New cycle starts with a clean ledger
        claim_eq!(state.receipt(PROJECT, COLLECTOR), None);
        claim_eq!(state.project(PROJECT).invocations, 1);
    }

    #[concordium_test]
    fn test_half_life_range() {
        let mut state = new_state();
        let range = HalfLifeRange {
            min: Duration::from_seconds(1),
            max: Duration::from_seconds(10),
        };

        claim_eq!(state.set_half_life_range(range), Ok(()));
        claim_eq!(
            state.configure(PROJECT, params(None), before_start()),
            Err(CustomContractError::InvalidAuctionParameters)
        );
        claim_eq!(
            state.set_half_life_range(HalfLifeRange {
                min: Duration::from_seconds(10),
                max: Duration::from_seconds(1),
            }),
            Err(CustomContractError::InvalidAuctionParameters)
        );
        claim_eq!(state.half_life_range, range);
    }
}

use commons::{
    handle_collaborator_error, handle_mint_error, AuthorityUpdateParams, AuthorityViewParams,
    CustomContractError, HostCoreExt, HostMinterFilterExt, ProjectId, SplitRecipients,
};
use concordium_std::*;

use crate::clock::HalfLifeRange;
use crate::events::MinterEvent;
use crate::external::*;
use crate::ledger::PurchaseReceipt;
use crate::state::{Settlement, State};

/// Initialize the minter with the core contract and minter filter it serves.
/// The init origin becomes the first admin.
#[init(contract = "DaSettlementMinter", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(State::new(
        state_builder,
        ctx.init_origin(),
        params.core,
        params.minter_filter,
    ))
}

/// Set auction parameters for a project. Parameters can be changed until the
/// auction starts.
///
/// It rejects if:
/// - Fails to parse `ConfigureParams` parameters.
/// - Sender is not the project artist reported by the core contract.
/// - The auction has started or is finalized.
/// - Parameters are invalid.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "configureAuction",
    parameter = "ConfigureParams",
    enable_logger
)]
fn contract_configure_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let ConfigureParams { project_id, params } =
        ConfigureParams::deserial(&mut ctx.parameter_cursor())?;
    let core = host.state().core;

    let recipients = host
        .core_get_split_recipients(&core, project_id)
        .map_err(handle_collaborator_error)?;
    ensure!(
        recipients.is_artist(&ctx.sender()),
        CustomContractError::NotArtist.into()
    );

    let cycle =
        host.state_mut()
            .configure(project_id, params.clone(), ctx.metadata().slot_time())?;

    logger.log(&MinterEvent::configured(project_id, cycle, &params))?;

    Ok(())
}

/// Purchase a token at the current auction price. The full payment is held
/// until the auction settles.
///
/// It rejects if:
/// - Fails to parse `PurchaseParams` parameters.
/// - Sender is a contract.
/// - The minter filter does not allow this minter to mint for the project.
/// - The auction is not active, has expired or the project sold out.
/// - Sent amount is below the current price.
/// - Minting or revenue distribution fails.
#[receive(
    mutable,
    payable,
    contract = "DaSettlementMinter",
    name = "purchase",
    parameter = "PurchaseParams",
    enable_logger
)]
fn contract_purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let PurchaseParams { project_id, to } = PurchaseParams::deserial(&mut ctx.parameter_cursor())?;
    let purchaser = sender_account(ctx)?;
    let to = to.unwrap_or(purchaser);
    let slot_time = ctx.metadata().slot_time();
    let core = host.state().core;
    let minter_filter = host.state().minter_filter;

    let authorized = host
        .filter_is_authorized_minter(
            &minter_filter,
            project_id,
            Address::Contract(ctx.self_address()),
        )
        .map_err(handle_collaborator_error)?;
    ensure!(authorized, CustomContractError::Unauthorized.into());

    let max_invocations = host
        .core_get_max_invocations(&core, project_id)
        .map_err(handle_collaborator_error)?;
    let recipients = host
        .core_get_split_recipients(&core, project_id)
        .map_err(handle_collaborator_error)?;

    let outcome =
        host.state_mut()
            .purchase(project_id, purchaser, amount, slot_time, max_invocations)?;
    let payouts = outcome
        .settlement
        .as_ref()
        .map(|settlement| settlement_payouts(&recipients, settlement))
        .transpose()?;

    let token_id = host
        .core_mint(&core, project_id, Address::Account(to))
        .map_err(handle_mint_error)?;

    logger.log(&MinterEvent::purchased(
        project_id,
        outcome.cycle,
        &purchaser,
        &to,
        &token_id,
        outcome.price,
        amount,
        outcome.receipt,
    ))?;

    if let (Some(settlement), Some((revenue, payouts))) = (outcome.settlement, payouts) {
        logger.log(&MinterEvent::finalized(
            project_id,
            settlement.cycle,
            settlement.settled_price,
            settlement.num_purchased,
            revenue,
        ))?;
        transfer_all(host, payouts)?;
    }

    Ok(())
}

/// Current auction price of a project. Settled price once finalized.
#[receive(
    contract = "DaSettlementMinter",
    name = "getCurrentPrice",
    parameter = "ProjectId",
    return_value = "Amount"
)]
fn contract_get_current_price<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    let project_id = ProjectId::deserial(&mut ctx.parameter_cursor())?;
    let price = host
        .state()
        .current_price(project_id, ctx.metadata().slot_time())?;
    Ok(price)
}

/// Settle the auction at the current price and pay out the revenue to the
/// split recipients. The artist and maintainers may finalize at any time,
/// anyone else only after the finalization timeout.
///
/// It rejects if:
/// - Fails to parse `ProjectId` parameter.
/// - The auction has not started or is already finalized.
/// - Sender may not finalize yet.
/// - Revenue distribution fails.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "finalizeAuction",
    parameter = "ProjectId",
    enable_logger
)]
fn contract_finalize_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let project_id = ProjectId::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    let core = host.state().core;

    let recipients = host
        .core_get_split_recipients(&core, project_id)
        .map_err(handle_collaborator_error)?;
    let privileged = recipients.is_artist(&sender)
        || host.state().authority.has_maintainer_rights(&sender);

    let settlement =
        host.state_mut()
            .finalize(project_id, ctx.metadata().slot_time(), privileged)?;
    let (revenue, payouts) = settlement_payouts(&recipients, &settlement)?;

    logger.log(&MinterEvent::finalized(
        project_id,
        settlement.cycle,
        settlement.settled_price,
        settlement.num_purchased,
        revenue,
    ))?;

    transfer_all(host, payouts)
}

/// Reclaim what the sender paid above the settled price of a project.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "reclaimExcess",
    parameter = "ReclaimParams",
    enable_logger
)]
fn contract_reclaim_excess<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let ReclaimParams { project_id, to } = ReclaimParams::deserial(&mut ctx.parameter_cursor())?;
    reclaim_excess(ctx, host, logger, &[project_id], to)
}

/// Reclaim excess funds of several projects with a single transfer. Fails as
/// a whole if any project can not be reclaimed.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "reclaimExcessForProjects",
    parameter = "ReclaimManyParams",
    enable_logger
)]
fn contract_reclaim_excess_for_projects<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let ReclaimManyParams { project_ids, to } =
        ReclaimManyParams::deserial(&mut ctx.parameter_cursor())?;
    reclaim_excess(ctx, host, logger, &project_ids, to)
}

/// Clear the project auction and start a new cycle.
///
/// It rejects if:
/// - Fails to parse `ProjectId` parameter.
/// - Sender is not an admin.
/// - There are purchases that are not settled and reclaimed.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "resetAuction",
    parameter = "ProjectId",
    enable_logger
)]
fn contract_reset_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let project_id = ProjectId::deserial(&mut ctx.parameter_cursor())?;
    host.state().authority.ensure_admin(&ctx.sender())?;

    let cycle = host.state_mut().reset(project_id)?;
    logger.log(&MinterEvent::reset(project_id, cycle))?;

    Ok(())
}

#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "setHalfLifeRange",
    parameter = "HalfLifeRange",
    enable_logger
)]
fn contract_set_half_life_range<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let range = HalfLifeRange::deserial(&mut ctx.parameter_cursor())?;
    host.state().authority.ensure_maintainer(&ctx.sender())?;

    host.state_mut().set_half_life_range(range)?;
    logger.log(&MinterEvent::HalfLifeRangeUpdated(&range))?;

    Ok(())
}

#[receive(
    contract = "DaSettlementMinter",
    name = "viewHalfLifeRange",
    return_value = "HalfLifeRange"
)]
fn contract_view_half_life_range<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<HalfLifeRange> {
    Ok(host.state().half_life_range)
}

#[receive(
    contract = "DaSettlementMinter",
    name = "viewAuction",
    parameter = "ProjectId",
    return_value = "AuctionView"
)]
fn contract_view_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AuctionView> {
    let project_id = ProjectId::deserial(&mut ctx.parameter_cursor())?;
    let project = host.state().project(project_id);
    let slot_time = ctx.metadata().slot_time();

    Ok(AuctionView {
        phase: project.phase(slot_time),
        cycle: project.cycle,
        invocations: project.invocations,
        at_base_price: project
            .auction
            .as_ref()
            .map(|auction| auction.params.is_at_base(slot_time))
            .unwrap_or(false),
        auction: project.auction,
    })
}

/// Purchase receipt of the current auction cycle.
#[receive(
    contract = "DaSettlementMinter",
    name = "viewReceipt",
    parameter = "ReceiptQuery",
    return_value = "Option<PurchaseReceipt>"
)]
fn contract_view_receipt<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Option<PurchaseReceipt>> {
    let query = ReceiptQuery::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().receipt(query.project_id, query.purchaser))
}

/// Excess funds of a purchaser. Before settlement this is an estimate at the
/// current price.
#[receive(
    contract = "DaSettlementMinter",
    name = "getExcessFunds",
    parameter = "ReceiptQuery",
    return_value = "Amount"
)]
fn contract_get_excess_funds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    let query = ReceiptQuery::deserial(&mut ctx.parameter_cursor())?;
    let excess = host.state().excess_funds(
        query.project_id,
        query.purchaser,
        ctx.metadata().slot_time(),
    )?;
    Ok(excess)
}

/// Function to manage addresses that are allowed to maintain and modify the state of the contract.
///
/// It rejects if:
/// - Fails to parse `AuthorityUpdateParams` parameters.
/// - Sender lacks the rights to manage the requested role.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams"
)]
fn contract_update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    let params = AuthorityUpdateParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    host.state_mut().authority.handle_update(sender, params)?;
    Ok(())
}

/// Function to view addresses that are allowed to maintain and modify the state of the contract.
#[receive(
    contract = "DaSettlementMinter",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn contract_view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<Address>> {
    let params = AuthorityViewParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().authority.handle_view(params))
}

/// Function to update internal values. This includes:
/// - Core. Token contract that mints project tokens and reports splits.
/// - MinterFilter. Contract that authorizes minters per project.
///
/// It rejects if:
/// - Fails to parse `InternalValue` parameters.
/// - Sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "DaSettlementMinter",
    name = "updateInternalValue",
    parameter = "InternalValue"
)]
fn contract_update_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    let value = InternalValue::deserial(&mut ctx.parameter_cursor())?;
    host.state().authority.ensure_maintainer(&ctx.sender())?;

    let state = host.state_mut();
    match value {
        InternalValue::Core(core) => state.core = core,
        InternalValue::MinterFilter(filter) => state.minter_filter = filter,
    }

    Ok(())
}

#[receive(
    contract = "DaSettlementMinter",
    name = "viewInternalValue",
    parameter = "ViewInternalValueParams",
    return_value = "ContractAddress"
)]
fn contract_view_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ContractAddress> {
    let params = ViewInternalValueParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    Ok(match params {
        ViewInternalValueParams::Core => state.core,
        ViewInternalValueParams::MinterFilter => state.minter_filter,
    })
}

fn sender_account(ctx: &impl HasReceiveContext) -> ReceiveResult<AccountAddress> {
    match ctx.sender() {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    }
}

/// Settlement revenue and the transfers that distribute it.
fn settlement_payouts(
    recipients: &SplitRecipients,
    settlement: &Settlement,
) -> Result<(Amount, Vec<(AccountAddress, Amount)>), CustomContractError> {
    let revenue = settlement.revenue()?;
    let payouts = recipients.shares(revenue)?.payouts(recipients);
    Ok((revenue, payouts))
}

fn transfer_all<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    payouts: Vec<(AccountAddress, Amount)>,
) -> ReceiveResult<()> {
    for (account, amount) in payouts {
        host.invoke_transfer(&account, amount)
            .map_err(CustomContractError::from)?;
    }
    Ok(())
}

fn reclaim_excess<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    project_ids: &[ProjectId],
    to: Option<AccountAddress>,
) -> ReceiveResult<()> {
    let purchaser = sender_account(ctx)?;
    let to = to.unwrap_or(purchaser);

    let reclaimed = host.state_mut().reclaim(project_ids, purchaser)?;

    let mut total = Amount::zero();
    for entry in reclaimed.iter() {
        total = total
            .micro_ccd
            .checked_add(entry.amount.micro_ccd)
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::AccountingInvariantViolated)?;
        logger.log(&MinterEvent::reclaimed(
            entry.project_id,
            entry.cycle,
            &purchaser,
            &to,
            entry.amount,
        ))?;
    }

    if total > Amount::zero() {
        host.invoke_transfer(&to, total)
            .map_err(CustomContractError::from)?;
    }

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use commons::{MintParams, MinterQuery, Percentage};
    use concordium_cis2::TokenIdVec;
    use test_infrastructure::*;

    use crate::clock::AuctionParameters;
    use crate::state::AuctionPhase;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const MAINTAINER: AccountAddress = AccountAddress([2; 32]);
    const ARTIST: AccountAddress = AccountAddress([3; 32]);
    const PLATFORM: AccountAddress = AccountAddress([4; 32]);
    const RENDER_PROVIDER: AccountAddress = AccountAddress([5; 32]);
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
    const MINTER: ContractAddress = ContractAddress {
        index: 3,
        subindex: 0,
    };
    const PROJECT: ProjectId = 7;
    const HOUR_MILLIS: u64 = 3_600_000;
    const START_MILLIS: u64 = 1_000_000_000;

    fn at(offset_millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS + offset_millis)
    }

    fn before_start() -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS - 1)
    }

    fn micro(amount: u64) -> Amount {
        Amount::from_micro_ccd(amount)
    }

    fn token() -> TokenIdVec {
        TokenIdVec(vec![0, 7, 0, 1])
    }

    fn splits() -> SplitRecipients {
        SplitRecipients {
            artist: ARTIST,
            platform: PLATFORM,
            platform_share: Percentage::from_percent(10),
            render_provider: RENDER_PROVIDER,
            render_provider_share: Percentage::from_percent(5),
        }
    }

    fn auction_params(timeout: Option<Duration>) -> AuctionParameters {
        AuctionParameters {
            start: at(0),
            price_decay_half_life: Duration::from_seconds(3600),
            starting_price: Amount::from_ccd(1),
            base_price: micro(100_000),
            finalization_timeout: timeout,
        }
    }

    fn receive_ctx(sender: Address, parameter: &[u8], slot_time: Timestamp) -> TestReceiveContext {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender)
            .set_self_address(MINTER)
            .set_parameter(parameter)
            .set_metadata_slot_time(slot_time);
        if let Address::Account(account) = sender {
            ctx.set_invoker(account);
        }
        ctx
    }

    fn setup_collaborators(host: &mut TestHost<State<TestStateApi>>, max_invocations: u32) {
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("getSplitRecipients".into()),
            parse_and_ok_mock::<ProjectId, _>(splits()),
        );
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("getMaxInvocations".into()),
            parse_and_ok_mock::<ProjectId, _>(max_invocations),
        );
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("mint".into()),
            parse_and_ok_mock::<MintParams, _>(token()),
        );
        host.setup_mock_entrypoint(
            FILTER,
            OwnedEntrypointName::new_unchecked("isAuthorizedMinterForProject".into()),
            parse_and_map_mock::<MinterQuery, _, _>(|query| {
                Some(query.minter == Address::Contract(MINTER))
            }),
        );
    }

    /// Minter with a maintainer and collaborators allowing `max_invocations`
    /// tokens per project.
    fn default_host(max_invocations: u32) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&InitParams {
            core: CORE,
            minter_filter: FILTER,
        });
        // admin is initialized to `ctx.origin()`
        ctx.set_init_origin(ADMIN).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = contract_init(&ctx, &mut state_builder)
            .expect_report("Failed during init_DaSettlementMinter");
        let mut host = TestHost::new(state, state_builder);

        let bytes = to_bytes(&AuthorityUpdateParams {
            field: commons::AuthorityField::Maintainer,
            kind: commons::AuthorityUpdateKind::Add,
            address: Address::Account(MAINTAINER),
        });
        let ctx = receive_ctx(Address::Account(ADMIN), &bytes, before_start());
        contract_update_authority(&ctx, &mut host).expect_report("Admin adds a maintainer");

        setup_collaborators(&mut host, max_invocations);
        host
    }

    fn configure(
        host: &mut TestHost<State<TestStateApi>>,
        project_id: ProjectId,
        params: AuctionParameters,
    ) -> ReceiveResult<()> {
        let bytes = to_bytes(&ConfigureParams { project_id, params });
        let ctx = receive_ctx(Address::Account(ARTIST), &bytes, before_start());
        contract_configure_auction(&ctx, host, &mut TestLogger::init())
    }

    /// Purchase with the contract balance topped up by the sent amount, as it
    /// is on chain.
    fn purchase(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        purchaser: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> ReceiveResult<()> {
        let bytes = to_bytes(&PurchaseParams {
            project_id: PROJECT,
            to: None,
        });
        let ctx = receive_ctx(Address::Account(purchaser), &bytes, slot_time);
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);

        let result = contract_purchase(&ctx, host, amount, logger);
        if result.is_err() {
            host.set_self_balance(balance);
        }
        result
    }

    fn finalize(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        sender: AccountAddress,
        project_id: ProjectId,
        slot_time: Timestamp,
    ) -> ReceiveResult<()> {
        let bytes = to_bytes(&project_id);
        let ctx = receive_ctx(Address::Account(sender), &bytes, slot_time);
        contract_finalize_auction(&ctx, host, logger)
    }

    fn reclaim(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        purchaser: AccountAddress,
        project_id: ProjectId,
    ) -> ReceiveResult<()> {
        let bytes = to_bytes(&ReclaimParams {
            project_id,
            to: None,
        });
        let ctx = receive_ctx(Address::Account(purchaser), &bytes, at(10 * HOUR_MILLIS));
        contract_reclaim_excess(&ctx, host, logger)
    }

    fn reset(host: &mut TestHost<State<TestStateApi>>, sender: AccountAddress) -> ReceiveResult<()> {
        let bytes = to_bytes(&PROJECT);
        let ctx = receive_ctx(Address::Account(sender), &bytes, at(10 * HOUR_MILLIS));
        contract_reset_auction(&ctx, host, &mut TestLogger::init())
    }

    fn view_auction(host: &TestHost<State<TestStateApi>>, slot_time: Timestamp) -> AuctionView {
        let bytes = to_bytes(&PROJECT);
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, slot_time);
        contract_view_auction(&ctx, host).expect_report("View never fails")
    }

    fn view_receipt(
        host: &TestHost<State<TestStateApi>>,
        purchaser: AccountAddress,
    ) -> Option<PurchaseReceipt> {
        let bytes = to_bytes(&ReceiptQuery {
            project_id: PROJECT,
            purchaser,
        });
        let ctx = receive_ctx(Address::Account(purchaser), &bytes, at(0));
        contract_view_receipt(&ctx, host).expect_report("View never fails")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host(10);
        let state = host.state();

        claim_eq!(state.core, CORE);
        claim_eq!(state.minter_filter, FILTER);
        claim_eq!(state.half_life_range, HalfLifeRange::default());

        // Admin has full rights
        claim!(state.authority.has_admin_rights(&Address::Account(ADMIN)));
        // Maintainer only has maintainer rights
        claim!(!state
            .authority
            .has_admin_rights(&Address::Account(MAINTAINER)));
        claim!(state
            .authority
            .has_maintainer_rights(&Address::Account(MAINTAINER)));
    }

    #[concordium_test]
    fn test_configure() {
        let mut host = default_host(10);

        let bytes = to_bytes(&ConfigureParams {
            project_id: PROJECT,
            params: auction_params(None),
        });
        let ctx = receive_ctx(Address::Account(ARTIST), &bytes, before_start());
        let mut logger = TestLogger::init();

        let result = contract_configure_auction(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MinterEvent::configured(
                PROJECT,
                0,
                &auction_params(None)
            ))]
        );

        let view = view_auction(&host, before_start());
        claim_eq!(view.phase, AuctionPhase::Configured);
        claim_eq!(view.cycle, 0);
        claim_eq!(
            view.auction.map(|auction| auction.params),
            Some(auction_params(None))
        );
        claim_eq!(view_auction(&host, at(0)).phase, AuctionPhase::Active);
    }

    #[concordium_test]
    fn test_configure_not_artist() {
        let mut host = default_host(10);

        let bytes = to_bytes(&ConfigureParams {
            project_id: PROJECT,
            params: auction_params(None),
        });
        let ctx = receive_ctx(Address::Account(ADMIN), &bytes, before_start());

        let result = contract_configure_auction(&ctx, &mut host, &mut TestLogger::init());

        claim_eq!(result, Err(CustomContractError::NotArtist.into()));
        claim_eq!(
            view_auction(&host, before_start()).phase,
            AuctionPhase::Unconfigured
        );
    }

    #[concordium_test]
    fn test_configure_invalid_parameters() {
        let mut host = default_host(10);

        let result = configure(
            &mut host,
            PROJECT,
            AuctionParameters {
                base_price: Amount::from_ccd(2),
                ..auction_params(None)
            },
        );

        claim_eq!(
            result,
            Err(CustomContractError::InvalidAuctionParameters.into())
        );
        claim_eq!(view_auction(&host, before_start()).auction, None);
    }

    #[concordium_test]
    fn test_configure_after_start() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");

        let bytes = to_bytes(&ConfigureParams {
            project_id: PROJECT,
            params: auction_params(None),
        });
        let ctx = receive_ctx(Address::Account(ARTIST), &bytes, at(0));

        let result = contract_configure_auction(&ctx, &mut host, &mut TestLogger::init());

        claim_eq!(
            result,
            Err(CustomContractError::AuctionAlreadyStarted.into())
        );
    }

    #[concordium_test]
    fn test_purchase() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("mint".into()),
            parse_and_check_mock::<MintParams, _>(
                |params| params.to == Address::Account(OTHER_COLLECTOR),
                token(),
            ),
        );

        let bytes = to_bytes(&PurchaseParams {
            project_id: PROJECT,
            to: Some(OTHER_COLLECTOR),
        });
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(HOUR_MILLIS));
        let mut logger = TestLogger::init();
        host.set_self_balance(micro(600_000));

        let result = contract_purchase(&ctx, &mut host, micro(600_000), &mut logger);

        claim_eq!(result, Ok(()));

        // Receipt belongs to the sender, the token goes to `to`
        let receipt = PurchaseReceipt {
            total_paid: micro(600_000),
            tokens_purchased: 1,
            has_reclaimed: false,
        };
        claim_eq!(view_receipt(&host, COLLECTOR), Some(receipt));
        claim_eq!(view_receipt(&host, OTHER_COLLECTOR), None);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MinterEvent::purchased(
                PROJECT,
                0,
                &COLLECTOR,
                &OTHER_COLLECTOR,
                &token(),
                micro(500_000),
                micro(600_000),
                receipt,
            ))]
        );

        // Funds stay in escrow until settlement
        claim_eq!(host.self_balance(), micro(600_000));
        claim_eq!(view_auction(&host, at(HOUR_MILLIS)).invocations, 1);
    }

    #[concordium_test]
    fn test_purchase_before_start() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            before_start(),
        );

        claim_eq!(result, Err(CustomContractError::AuctionNotStarted.into()));
    }

    #[concordium_test]
    fn test_purchase_not_configured() {
        let mut host = default_host(10);

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            at(0),
        );

        claim_eq!(result, Err(CustomContractError::AuctionNotConfigured.into()));
    }

    #[concordium_test]
    fn test_purchase_insufficient_payment() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();

        let result = purchase(&mut host, &mut logger, COLLECTOR, micro(999_999), at(0));

        claim_eq!(
            result,
            Err(CustomContractError::InsufficientPayment.into())
        );
        claim_eq!(view_receipt(&host, COLLECTOR), None);
        claim_eq!(view_auction(&host, at(0)).invocations, 0);
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_purchase_unauthorized_minter() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        host.setup_mock_entrypoint(
            FILTER,
            OwnedEntrypointName::new_unchecked("isAuthorizedMinterForProject".into()),
            parse_and_ok_mock::<MinterQuery, _>(false),
        );

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            at(0),
        );

        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim_eq!(view_receipt(&host, COLLECTOR), None);
    }

    #[concordium_test]
    fn test_purchase_from_contract() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");

        let bytes = to_bytes(&PurchaseParams {
            project_id: PROJECT,
            to: None,
        });
        let mut ctx = receive_ctx(Address::Contract(FILTER), &bytes, at(0));
        ctx.set_invoker(COLLECTOR);

        let result = contract_purchase(&ctx, &mut host, Amount::from_ccd(1), &mut TestLogger::init());

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_purchase_mint_traps() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("mint".into()),
            trap_mock::<MintParams, _>(),
        );

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            at(0),
        );

        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    }

    #[concordium_test]
    fn test_purchase_mint_rejected_by_core() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        host.setup_mock_entrypoint(
            CORE,
            OwnedEntrypointName::new_unchecked("mint".into()),
            reject_mock(-1),
        );

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            at(0),
        );

        // Core cap can be lower than what the minter has seen so far
        claim_eq!(result, Err(CustomContractError::MaxInvocationsReached.into()));
    }

    #[concordium_test]
    fn test_sellout_settles_and_distributes() {
        let mut host = default_host(2);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();

        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("First purchase");
        purchase(
            &mut host,
            &mut logger,
            OTHER_COLLECTOR,
            micro(500_000),
            at(HOUR_MILLIS),
        )
        .expect_report("Last purchase");

        // Revenue at the settled price: 2 x 0.5 CCD
        claim_eq!(
            logger.logs.last(),
            Some(&to_bytes(&MinterEvent::finalized(
                PROJECT,
                0,
                micro(500_000),
                2,
                Amount::from_ccd(1)
            )))
        );
        claim!(host.transfer_occurred(&PLATFORM, micro(100_000)));
        claim!(host.transfer_occurred(&RENDER_PROVIDER, micro(50_000)));
        claim!(host.transfer_occurred(&ARTIST, micro(850_000)));
        claim_eq!(host.self_balance(), micro(500_000));
        claim_eq!(
            view_auction(&host, at(HOUR_MILLIS)).phase,
            AuctionPhase::Finalized
        );

        // Sold out
        claim_eq!(
            purchase(
                &mut host,
                &mut logger,
                COLLECTOR,
                Amount::from_ccd(1),
                at(HOUR_MILLIS)
            ),
            Err(CustomContractError::AlreadyFinalized.into())
        );

        // Early purchaser gets back what was paid above the settled price
        reclaim(&mut host, &mut logger, COLLECTOR, PROJECT).expect_report("Settled auction");
        claim!(host.transfer_occurred(&COLLECTOR, micro(500_000)));
        reclaim(&mut host, &mut logger, OTHER_COLLECTOR, PROJECT).expect_report("Settled auction");
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    fn test_max_invocations_reached() {
        let mut host = default_host(0);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");

        let result = purchase(
            &mut host,
            &mut TestLogger::init(),
            COLLECTOR,
            Amount::from_ccd(1),
            at(0),
        );

        claim_eq!(
            result,
            Err(CustomContractError::MaxInvocationsReached.into())
        );
    }

    #[concordium_test]
    fn test_finalize_and_reclaim() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();
        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("Purchase at start");

        claim_eq!(
            finalize(&mut host, &mut logger, COLLECTOR, PROJECT, at(HOUR_MILLIS)),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(
            reclaim(&mut host, &mut logger, COLLECTOR, PROJECT),
            Err(CustomContractError::AuctionNotFinalized.into())
        );

        // One half-life later the price is 0.5 CCD
        finalize(&mut host, &mut logger, MAINTAINER, PROJECT, at(HOUR_MILLIS))
            .expect_report("Maintainer finalizes");
        claim!(host.transfer_occurred(&ARTIST, micro(425_000)));
        claim_eq!(
            finalize(&mut host, &mut logger, ARTIST, PROJECT, at(HOUR_MILLIS)),
            Err(CustomContractError::AlreadyFinalized.into())
        );

        let bytes = to_bytes(&ReceiptQuery {
            project_id: PROJECT,
            purchaser: COLLECTOR,
        });
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(HOUR_MILLIS));
        claim_eq!(
            contract_get_excess_funds(&ctx, &host),
            Ok(micro(500_000))
        );

        let mut logger = TestLogger::init();
        claim_eq!(reclaim(&mut host, &mut logger, COLLECTOR, PROJECT), Ok(()));
        claim!(host.transfer_occurred(&COLLECTOR, micro(500_000)));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MinterEvent::reclaimed(
                PROJECT,
                0,
                &COLLECTOR,
                &COLLECTOR,
                micro(500_000)
            ))]
        );

        claim_eq!(
            reclaim(&mut host, &mut logger, COLLECTOR, PROJECT),
            Err(CustomContractError::AlreadyReclaimed.into())
        );
        claim_eq!(contract_get_excess_funds(&ctx, &host), Ok(Amount::zero()));
    }

    #[concordium_test]
    fn test_reclaim_zero_excess() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();
        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("Purchase at start");
        finalize(&mut host, &mut logger, ARTIST, PROJECT, at(1)).expect_report("Artist finalizes");
        claim_eq!(host.self_balance(), Amount::zero());

        let mut logger = TestLogger::init();
        claim_eq!(reclaim(&mut host, &mut logger, COLLECTOR, PROJECT), Ok(()));

        claim_eq!(
            logger.logs,
            vec![to_bytes(&MinterEvent::reclaimed(
                PROJECT,
                0,
                &COLLECTOR,
                &COLLECTOR,
                Amount::zero()
            ))]
        );
        claim!(!host.transfer_occurred(&COLLECTOR, Amount::zero()));
        claim_eq!(
            view_receipt(&host, COLLECTOR).map(|receipt| receipt.has_reclaimed),
            Some(true)
        );
        claim_eq!(
            reclaim(&mut host, &mut logger, COLLECTOR, PROJECT),
            Err(CustomContractError::AlreadyReclaimed.into())
        );
    }

    #[concordium_test]
    fn test_reclaim_without_receipt() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();
        finalize(&mut host, &mut logger, ARTIST, PROJECT, at(1)).expect_report("Artist finalizes");

        claim_eq!(
            reclaim(&mut host, &mut logger, COLLECTOR, PROJECT),
            Err(CustomContractError::NoReceipt.into())
        );
    }

    #[concordium_test]
    fn test_reclaim_failed_transfer() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();
        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("Purchase at start");
        finalize(&mut host, &mut logger, ARTIST, PROJECT, at(HOUR_MILLIS))
            .expect_report("Artist finalizes");

        host.set_self_balance(micro(1));

        claim_eq!(
            reclaim(&mut host, &mut logger, COLLECTOR, PROJECT),
            Err(CustomContractError::InvokeTransferError.into())
        );
    }

    #[concordium_test]
    fn test_reclaim_for_projects() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        configure(&mut host, PROJECT + 1, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();

        for project_id in [PROJECT, PROJECT + 1].iter().copied() {
            let bytes = to_bytes(&PurchaseParams {
                project_id,
                to: None,
            });
            let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(0));
            let balance = host.self_balance();
            host.set_self_balance(balance + Amount::from_ccd(1));
            contract_purchase(&ctx, &mut host, Amount::from_ccd(1), &mut logger)
                .expect_report("Purchase at start");
            finalize(&mut host, &mut logger, ARTIST, project_id, at(HOUR_MILLIS))
                .expect_report("Artist finalizes");
        }

        // Unknown project fails the whole batch
        let bytes = to_bytes(&ReclaimManyParams {
            project_ids: vec![PROJECT, PROJECT + 2],
            to: None,
        });
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(HOUR_MILLIS));
        claim_eq!(
            contract_reclaim_excess_for_projects(&ctx, &mut host, &mut logger),
            Err(CustomContractError::AuctionNotConfigured.into())
        );
        claim_eq!(
            view_receipt(&host, COLLECTOR).map(|receipt| receipt.has_reclaimed),
            Some(false)
        );

        let bytes = to_bytes(&ReclaimManyParams {
            project_ids: vec![PROJECT, PROJECT + 1],
            to: Some(OTHER_COLLECTOR),
        });
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(HOUR_MILLIS));
        let mut logger = TestLogger::init();

        claim_eq!(
            contract_reclaim_excess_for_projects(&ctx, &mut host, &mut logger),
            Ok(())
        );
        // A single transfer of both excesses to the requested receiver
        claim!(host.transfer_occurred(&OTHER_COLLECTOR, Amount::from_ccd(1)));
        claim_eq!(logger.logs.len(), 2);
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    fn test_expired_auction() {
        let mut host = default_host(10);
        configure(
            &mut host,
            PROJECT,
            auction_params(Some(Duration::from_seconds(3600))),
        )
        .expect_report("Artist configures");
        let mut logger = TestLogger::init();
        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("Purchase at start");

        claim_eq!(
            purchase(
                &mut host,
                &mut logger,
                COLLECTOR,
                Amount::from_ccd(1),
                at(HOUR_MILLIS + 1)
            ),
            Err(CustomContractError::AuctionExpired.into())
        );

        // Expired auction quotes the price it settles at
        let bytes = to_bytes(&PROJECT);
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(10 * HOUR_MILLIS));
        claim_eq!(
            contract_get_current_price(&ctx, &host),
            Ok(micro(500_000))
        );

        // Anyone may finalize an expired auction, at the deadline price
        finalize(&mut host, &mut logger, OTHER_COLLECTOR, PROJECT, at(10 * HOUR_MILLIS))
            .expect_report("Expired auction");
        claim_eq!(
            contract_get_current_price(&ctx, &host),
            Ok(micro(500_000))
        );
    }

    #[concordium_test]
    fn test_current_price() {
        let mut host = default_host(10);
        let bytes = to_bytes(&PROJECT);

        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(0));
        claim_eq!(
            contract_get_current_price(&ctx, &host),
            Err(CustomContractError::AuctionNotConfigured.into())
        );

        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");

        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, before_start());
        claim_eq!(
            contract_get_current_price(&ctx, &host),
            Err(CustomContractError::AuctionNotStarted.into())
        );
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(2 * HOUR_MILLIS));
        claim_eq!(contract_get_current_price(&ctx, &host), Ok(micro(250_000)));
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, at(50 * HOUR_MILLIS));
        claim_eq!(contract_get_current_price(&ctx, &host), Ok(micro(100_000)));
        claim!(view_auction(&host, at(50 * HOUR_MILLIS)).at_base_price);
        claim!(!view_auction(&host, at(2 * HOUR_MILLIS)).at_base_price);
    }

    #[concordium_test]
    fn test_reset() {
        let mut host = default_host(10);
        configure(&mut host, PROJECT, auction_params(None)).expect_report("Artist configures");
        let mut logger = TestLogger::init();
        purchase(&mut host, &mut logger, COLLECTOR, Amount::from_ccd(1), at(0))
            .expect_report("Purchase at start");

        claim_eq!(
            reset(&mut host, MAINTAINER),
            Err(CustomContractError::NotAdmin.into())
        );
        claim_eq!(
            reset(&mut host, ADMIN),
            Err(CustomContractError::OperationNotPermitted.into())
        );

        finalize(&mut host, &mut logger, ARTIST, PROJECT, at(HOUR_MILLIS))
            .expect_report("Artist finalizes");
        claim_eq!(
            reset(&mut host, ADMIN),
            Err(CustomContractError::OperationNotPermitted.into())
        );

        reclaim(&mut host, &mut logger, COLLECTOR, PROJECT).expect_report("Settled auction");

        let bytes = to_bytes(&PROJECT);
        let ctx = receive_ctx(Address::Account(ADMIN), &bytes, at(HOUR_MILLIS));
        let mut logger = TestLogger::init();
        claim_eq!(
            contract_reset_auction(&ctx, &mut host, &mut logger),
            Ok(())
        );
        claim_eq!(logger.logs, vec![to_bytes(&MinterEvent::reset(PROJECT, 1))]);

        let view = view_auction(&host, at(HOUR_MILLIS));
        claim_eq!(
            view,
            AuctionView {
                phase: AuctionPhase::Unconfigured,
                cycle: 1,
                invocations: 1,
                at_base_price: false,
                auction: None,
            }
        );
        claim_eq!(view_receipt(&host, COLLECTOR), None);

        // The project can be auctioned again
        claim_eq!(configure(&mut host, PROJECT, auction_params(None)), Ok(()));
    }

    #[concordium_test]
    fn test_set_half_life_range() {
        let mut host = default_host(10);
        let range = HalfLifeRange {
            min: Duration::from_seconds(60),
            max: Duration::from_seconds(120),
        };
        let bytes = to_bytes(&range);

        let ctx = receive_ctx(Address::Account(ARTIST), &bytes, before_start());
        claim_eq!(
            contract_set_half_life_range(&ctx, &mut host, &mut TestLogger::init()),
            Err(CustomContractError::Unauthorized.into())
        );

        let ctx = receive_ctx(Address::Account(MAINTAINER), &bytes, before_start());
        let mut logger = TestLogger::init();
        claim_eq!(
            contract_set_half_life_range(&ctx, &mut host, &mut logger),
            Ok(())
        );
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MinterEvent::HalfLifeRangeUpdated(&range))]
        );
        claim_eq!(
            contract_view_half_life_range(&ctx, &host),
            Ok(range)
        );

        // Hourly decay is now out of range
        claim_eq!(
            configure(&mut host, PROJECT, auction_params(None)),
            Err(CustomContractError::InvalidAuctionParameters.into())
        );
    }

    #[concordium_test]
    fn test_update_internal_value() {
        let mut host = default_host(10);
        let new_core = ContractAddress {
            index: 42,
            subindex: 0,
        };
        let bytes = to_bytes(&InternalValue::Core(new_core));

        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, before_start());
        claim_eq!(
            contract_update_internal_value(&ctx, &mut host),
            Err(CustomContractError::Unauthorized.into())
        );

        let ctx = receive_ctx(Address::Account(MAINTAINER), &bytes, before_start());
        claim_eq!(contract_update_internal_value(&ctx, &mut host), Ok(()));

        let bytes = to_bytes(&ViewInternalValueParams::Core);
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, before_start());
        claim_eq!(contract_view_internal_value(&ctx, &host), Ok(new_core));

        let bytes = to_bytes(&ViewInternalValueParams::MinterFilter);
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, before_start());
        claim_eq!(contract_view_internal_value(&ctx, &host), Ok(FILTER));
    }

    #[concordium_test]
    fn test_view_authority() {
        let host = default_host(10);
        let bytes = to_bytes(&AuthorityViewParams {
            field: commons::AuthorityField::Maintainer,
            skip: 0,
            show: 10,
        });
        let ctx = receive_ctx(Address::Account(COLLECTOR), &bytes, before_start());

        claim_eq!(
            contract_view_authority(&ctx, &host),
            Ok(vec![Address::Account(MAINTAINER)])
        );
    }
}

use commons::ProjectId;
use concordium_std::*;

use crate::clock::AuctionParameters;
use crate::state::{AuctionPhase, ProjectAuction};

/// Minter initialization parameters.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Core token contract.
    pub core: ContractAddress,
    /// Minter filter contract.
    pub minter_filter: ContractAddress,
}

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct ConfigureParams {
    pub project_id: ProjectId,
    pub params: AuctionParameters,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct PurchaseParams {
    pub project_id: ProjectId,
    /// Token receiver. Sender by default.
    pub to: Option<AccountAddress>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct ReclaimParams {
    pub project_id: ProjectId,
    /// Payout receiver. Sender by default.
    pub to: Option<AccountAddress>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct ReclaimManyParams {
    pub project_ids: Vec<ProjectId>,
    /// Payout receiver. Sender by default.
    pub to: Option<AccountAddress>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct ReceiptQuery {
    pub project_id: ProjectId,
    pub purchaser: AccountAddress,
}

/// Project auction as returned by `viewAuction`.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct AuctionView {
    pub phase: AuctionPhase,
    pub cycle: u32,
    pub invocations: u32,
    /// Price has decayed to the base price.
    pub at_base_price: bool,
    pub auction: Option<ProjectAuction>,
}

#[derive(Debug, Serialize, SchemaType)]
pub enum InternalValue {
    Core(ContractAddress),
    MinterFilter(ContractAddress),
}

#[derive(Debug, Serialize, SchemaType)]
pub enum ViewInternalValueParams {
    Core,
    MinterFilter,
}

use super::*;

/// Project identifier assigned by the core contract.
pub type ProjectId = u64;

/// Token identifier returned by the core contract on mint.
pub type ContractTokenId = TokenIdVec;

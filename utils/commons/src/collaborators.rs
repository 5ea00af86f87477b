//! Bindings for the contracts a minter depends on: the core token contract
//! (minting, invocation caps, revenue splits) and the minter filter
//! (which minter may mint for which project).
use super::*;

/// Parameter of the minter filter `isAuthorizedMinterForProject` entrypoint.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct MinterQuery {
    pub project_id: ProjectId,
    pub minter: Address,
}

/// Parameter of the core contract `mint` entrypoint.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct MintParams {
    pub project_id: ProjectId,
    pub to: Address,
}

pub trait HostMinterFilterExt<S>: HasHost<S> {
    fn filter_is_authorized_minter(
        &self,
        filter: &ContractAddress,
        project_id: ProjectId,
        minter: Address,
    ) -> Result<bool, CollaboratorError<Self::ReturnValueType>> {
        let mut result = self
            .invoke_contract_read_only(
                filter,
                &MinterQuery { project_id, minter },
                EntrypointName::new_unchecked("isAuthorizedMinterForProject"),
                Amount::zero(),
            )
            .map_err(CollaboratorError::Call)?
            .ok_or(CollaboratorError::Compatibility)?;

        bool::deserial(&mut result).map_err(|_| CollaboratorError::Parse)
    }
}

impl<S, H: HasHost<S>> HostMinterFilterExt<S> for H {}

pub trait HostCoreExt<S>: HasHost<S> {
    fn core_get_max_invocations(
        &self,
        core: &ContractAddress,
        project_id: ProjectId,
    ) -> Result<u32, CollaboratorError<Self::ReturnValueType>> {
        let mut result = self
            .invoke_contract_read_only(
                core,
                &project_id,
                EntrypointName::new_unchecked("getMaxInvocations"),
                Amount::zero(),
            )
            .map_err(CollaboratorError::Call)?
            .ok_or(CollaboratorError::Compatibility)?;

        u32::deserial(&mut result).map_err(|_| CollaboratorError::Parse)
    }

    fn core_get_split_recipients(
        &self,
        core: &ContractAddress,
        project_id: ProjectId,
    ) -> Result<SplitRecipients, CollaboratorError<Self::ReturnValueType>> {
        let mut result = self
            .invoke_contract_read_only(
                core,
                &project_id,
                EntrypointName::new_unchecked("getSplitRecipients"),
                Amount::zero(),
            )
            .map_err(CollaboratorError::Call)?
            .ok_or(CollaboratorError::Compatibility)?;

        SplitRecipients::deserial(&mut result).map_err(|_| CollaboratorError::Parse)
    }

    fn core_mint(
        &mut self,
        core: &ContractAddress,
        project_id: ProjectId,
        to: Address,
    ) -> Result<ContractTokenId, CollaboratorError<Self::ReturnValueType>> {
        let (_, result) = self
            .invoke_contract(
                core,
                &MintParams { project_id, to },
                EntrypointName::new_unchecked("mint"),
                Amount::zero(),
            )
            .map_err(CollaboratorError::Call)?;
        let mut result = result.ok_or(CollaboratorError::Compatibility)?;

        ContractTokenId::deserial(&mut result).map_err(|_| CollaboratorError::Parse)
    }
}

impl<S, H: HasHost<S>> HostCoreExt<S> for H {}

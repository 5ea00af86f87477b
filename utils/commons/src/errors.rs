use super::*;

/// The custom errors the minter contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Auction parameters violate a configuration rule (Error code: -4).
    InvalidAuctionParameters,
    /// Auction parameters can not change once the auction has started (Error code: -5).
    AuctionAlreadyStarted,
    /// Revenue split percentages exceed 100% (Error code: -6).
    InvalidSplits,
    /// Sender is not allowed to perform this action (Error code: -7).
    Unauthorized,
    /// Only the project artist can perform this action (Error code: -8).
    NotArtist,
    /// Only an admin can perform this action (Error code: -9).
    NotAdmin,
    /// Only account addresses can purchase or reclaim (Error code: -10).
    OnlyAccountAddress,
    /// Sent amount is lower than the current auction price (Error code: -11).
    InsufficientPayment,
    /// No auction is configured for the project (Error code: -12).
    AuctionNotConfigured,
    /// Auction start time has not been reached (Error code: -13).
    AuctionNotStarted,
    /// Auction has not been finalized yet (Error code: -14).
    AuctionNotFinalized,
    /// Auction has already been finalized (Error code: -15).
    AlreadyFinalized,
    /// Auction finalization timeout has passed (Error code: -16).
    AuctionExpired,
    /// Project has no invocations left (Error code: -17).
    MaxInvocationsReached,
    /// Excess funds were already reclaimed (Error code: -18).
    AlreadyReclaimed,
    /// Purchaser has no receipt for the project auction (Error code: -19).
    NoReceipt,
    /// Operation not permitted in the current auction state (Error code: -20).
    OperationNotPermitted,
    /// Ledger accounting does not add up (Error code: -21).
    AccountingInvariantViolated,
    /// Failed to invoke a contract (Error code: -22).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -23).
    InvokeTransferError,
    /// Invoked contract does not behave as expected (Error code: -24).
    Incompatible,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Failure of a call to a collaborator contract that is expected to return a value.
#[derive(Debug)]
pub enum CollaboratorError<R> {
    Call(CallContractError<R>),
    Compatibility,
    Parse,
}

/// Map a collaborator rejection to the error surfaced by the minter.
pub fn handle_call_error<R>(error: CallContractError<R>) -> Reject {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible.into()
        }
        CallContractError::LogicReject { .. } => CustomContractError::InvokeContractError.into(),
        e => e.into(),
    }
}

pub fn handle_collaborator_error<R>(error: CollaboratorError<R>) -> Reject {
    match error {
        CollaboratorError::Call(e) => handle_call_error(e),
        CollaboratorError::Compatibility => CustomContractError::Incompatible.into(),
        CollaboratorError::Parse => CustomContractError::Incompatible.into(),
    }
}

/// The core contract rejects a mint once the project cap is hit.
pub fn handle_mint_error<R>(error: CollaboratorError<R>) -> Reject {
    match error {
        CollaboratorError::Call(CallContractError::LogicReject { .. }) => {
            CustomContractError::MaxInvocationsReached.into()
        }
        e => handle_collaborator_error(e),
    }
}

//! Collaborator mocks for contract tests.
use concordium_std::test_infrastructure::MockFn;
use concordium_std::*;

pub fn parse_and_ok_mock<D: Deserial, S>(
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _amount, _balance, _state| {
        D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        Ok((false, Some(return_value.clone())))
    })
}

pub fn parse_and_check_mock<D: Deserial, S>(
    check: impl Fn(&D) -> bool + 'static,
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        if !check(&value) {
            return Err(CallContractError::Trap);
        };
        Ok((false, Some(return_value.clone())))
    })
}

pub fn parse_and_map_mock<D: Deserial, T: Serial, S>(
    f: impl Fn(&D) -> Option<T> + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        f(&value)
            .map(|r| (false, Some(r)))
            .ok_or(CallContractError::Trap)
    })
}

/// Mock of a collaborator entrypoint that always traps.
pub fn trap_mock<D: Deserial, S>() -> MockFn<S> {
    parse_and_check_mock::<D, S>(|_| false, ())
}

/// Mock of a collaborator entrypoint that rejects with `reason`.
pub fn reject_mock<S>(reason: i32) -> MockFn<S> {
    MockFn::new(move |_parameter, _amount, _balance, _state| {
        Err::<(bool, Option<()>), _>(CallContractError::LogicReject {
            reason,
            return_value: (),
        })
    })
}

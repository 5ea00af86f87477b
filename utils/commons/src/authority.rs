use crate::CustomContractError;
use concordium_std::*;

/// Administrative roles of a minter.
///
/// Admins may reset auctions and manage both role lists. Maintainers may tune
/// minter settings, finalize auctions and manage the maintainer list.
#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    admins: StateSet<Address, S>,
    maintainers: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(state_builder: &mut StateBuilder<S>, admin: Address) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(admin);
        Self {
            admins,
            maintainers: state_builder.new_set(),
        }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    pub fn has_maintainer_rights(&self, address: &Address) -> bool {
        self.maintainers.contains(address) || self.has_admin_rights(address)
    }

    pub fn ensure_admin(&self, address: &Address) -> Result<(), CustomContractError> {
        ensure!(
            self.has_admin_rights(address),
            CustomContractError::NotAdmin
        );
        Ok(())
    }

    pub fn ensure_maintainer(&self, address: &Address) -> Result<(), CustomContractError> {
        ensure!(
            self.has_maintainer_rights(address),
            CustomContractError::Unauthorized
        );
        Ok(())
    }

    pub fn handle_update(
        &mut self,
        sender: Address,
        update: AuthorityUpdateParams,
    ) -> Result<(), CustomContractError> {
        let address_list = match update.field {
            AuthorityField::Maintainer => {
                self.ensure_maintainer(&sender)?;
                &mut self.maintainers
            }
            AuthorityField::Admin => {
                self.ensure_admin(&sender)?;
                &mut self.admins
            }
        };

        match update.kind {
            AuthorityUpdateKind::Remove => {
                address_list.remove(&update.address);
            }
            AuthorityUpdateKind::Add => {
                address_list.insert(update.address);
            }
        }

        Ok(())
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        let address_list = match view.field {
            AuthorityField::Maintainer => &self.maintainers,
            AuthorityField::Admin => &self.admins,
        };

        address_list
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityField {
    Maintainer,
    Admin,
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub field: AuthorityField,
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub field: AuthorityField,
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const MAINTAINER: AccountAddress = AccountAddress([2; 32]);
    const COLLECTOR: AccountAddress = AccountAddress([16; 32]);
    const FILTER: ContractAddress = ContractAddress {
        index: 16,
        subindex: 0,
    };

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut authority = Authority::new(&mut state_builder, Address::Account(ADMIN));
        authority.maintainers.insert(Address::Account(MAINTAINER));
        authority
    }

    fn update(field: AuthorityField, kind: AuthorityUpdateKind, address: Address) -> AuthorityUpdateParams {
        AuthorityUpdateParams {
            field,
            kind,
            address,
        }
    }

    #[concordium_test]
    fn test_roles() {
        let authority = default_authority();

        claim!(authority.has_admin_rights(&Address::Account(ADMIN)));
        claim!(authority.has_maintainer_rights(&Address::Account(ADMIN)));
        claim!(!authority.has_admin_rights(&Address::Account(MAINTAINER)));
        claim!(authority.has_maintainer_rights(&Address::Account(MAINTAINER)));

        claim_eq!(
            authority.ensure_admin(&Address::Account(MAINTAINER)),
            Err(CustomContractError::NotAdmin)
        );
        claim_eq!(
            authority.ensure_maintainer(&Address::Account(COLLECTOR)),
            Err(CustomContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_admin_manages_admins() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(ADMIN),
            update(
                AuthorityField::Admin,
                AuthorityUpdateKind::Add,
                Address::Contract(FILTER),
            ),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_admin_rights(&Address::Contract(FILTER)));

        let result = authority.handle_update(
            Address::Contract(FILTER),
            update(
                AuthorityField::Admin,
                AuthorityUpdateKind::Remove,
                Address::Account(ADMIN),
            ),
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.has_admin_rights(&Address::Account(ADMIN)));
    }

    #[concordium_test]
    fn test_maintainer_cannot_manage_admins() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            update(
                AuthorityField::Admin,
                AuthorityUpdateKind::Add,
                Address::Account(COLLECTOR),
            ),
        );
        claim_eq!(result, Err(CustomContractError::NotAdmin));
        claim!(!authority.has_admin_rights(&Address::Account(COLLECTOR)));

        // Maintainer list is open to maintainers
        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            update(
                AuthorityField::Maintainer,
                AuthorityUpdateKind::Add,
                Address::Account(COLLECTOR),
            ),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_maintainer_rights(&Address::Account(COLLECTOR)));
    }

    #[concordium_test]
    fn test_collector_cannot_manage_roles() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(COLLECTOR),
            update(
                AuthorityField::Maintainer,
                AuthorityUpdateKind::Add,
                Address::Account(COLLECTOR),
            ),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized));
        claim!(!authority.has_maintainer_rights(&Address::Account(COLLECTOR)));
    }

    #[concordium_test]
    fn test_view_pages() {
        let mut authority = default_authority();
        for n in 16u8..40 {
            authority.maintainers.insert(Address::Account(AccountAddress([n; 32])));
        }

        let mut seen = 0;
        loop {
            let page = authority.handle_view(AuthorityViewParams {
                field: AuthorityField::Maintainer,
                skip: seen,
                show: 10,
            });
            seen += page.len() as u32;
            if page.len() != 10 {
                break;
            }
        }

        // 24 added plus the default maintainer
        claim_eq!(seen, 25);
    }
}

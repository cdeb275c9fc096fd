//! The tagged Sabre payload and its wire conversions.
//!
//! [`SabrePayload`] carries exactly one action body, so "action says X but
//! body Y is populated" cannot be represented. The flat wire message in
//! [`crate::protos::sabre`] is only produced at encode time and checked on
//! the way back in.

use crate::addressing::{
    compute_contract_address, compute_contract_registry_address,
    compute_namespace_registry_address, compute_org_address, compute_setting_address,
    compute_smart_permission_address,
};
use crate::config::ADMINISTRATORS_SETTING_KEY;
use crate::error::BuildError;
use crate::protos::{self, sabre as wire};

use super::action::Action;

/// A fully built Sabre payload: one action with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SabrePayload {
    CreateContract(wire::CreateContractAction),
    DeleteContract(wire::DeleteContractAction),
    ExecuteContract(wire::ExecuteContractAction),
    CreateContractRegistry(wire::CreateContractRegistryAction),
    DeleteContractRegistry(wire::DeleteContractRegistryAction),
    UpdateContractRegistryOwners(wire::UpdateContractRegistryOwnersAction),
    CreateNamespaceRegistry(wire::CreateNamespaceRegistryAction),
    DeleteNamespaceRegistry(wire::DeleteNamespaceRegistryAction),
    UpdateNamespaceRegistryOwners(wire::UpdateNamespaceRegistryOwnersAction),
    CreateNamespaceRegistryPermission(wire::CreateNamespaceRegistryPermissionAction),
    DeleteNamespaceRegistryPermission(wire::DeleteNamespaceRegistryPermissionAction),
    CreateSmartPermission(wire::CreateSmartPermissionAction),
    UpdateSmartPermission(wire::UpdateSmartPermissionAction),
    DeleteSmartPermission(wire::DeleteSmartPermissionAction),
}

impl SabrePayload {
    /// The action this payload carries.
    pub fn action(&self) -> Action {
        match self {
            Self::CreateContract(_) => Action::CreateContract,
            Self::DeleteContract(_) => Action::DeleteContract,
            Self::ExecuteContract(_) => Action::ExecuteContract,
            Self::CreateContractRegistry(_) => Action::CreateContractRegistry,
            Self::DeleteContractRegistry(_) => Action::DeleteContractRegistry,
            Self::UpdateContractRegistryOwners(_) => Action::UpdateContractRegistryOwners,
            Self::CreateNamespaceRegistry(_) => Action::CreateNamespaceRegistry,
            Self::DeleteNamespaceRegistry(_) => Action::DeleteNamespaceRegistry,
            Self::UpdateNamespaceRegistryOwners(_) => Action::UpdateNamespaceRegistryOwners,
            Self::CreateNamespaceRegistryPermission(_) => {
                Action::CreateNamespaceRegistryPermission
            }
            Self::DeleteNamespaceRegistryPermission(_) => {
                Action::DeleteNamespaceRegistryPermission
            }
            Self::CreateSmartPermission(_) => Action::CreateSmartPermission,
            Self::UpdateSmartPermission(_) => Action::UpdateSmartPermission,
            Self::DeleteSmartPermission(_) => Action::DeleteSmartPermission,
        }
    }

    /// Serializes the payload into the bytes carried by a transaction.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BuildError> {
        protos::encode(&wire::SabrePayload::from(self.clone()))
    }

    /// Parses payload bytes, rejecting unknown actions and bodies that do
    /// not match their action.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BuildError> {
        Self::try_from(protos::decode::<wire::SabrePayload>(bytes)?)
    }

    /// The state addresses a node needs to read (`.0`) and write (`.1`) to
    /// apply this payload.
    ///
    /// Contract actions touch the contract registry and the contract
    /// itself. Executing a contract additionally touches every address the
    /// contract declared, plus the namespace registry guarding each one.
    /// Registry actions read the administrators setting. Smart permission
    /// actions read the owning Pike organization.
    pub fn state_addresses(&self) -> Result<(Vec<String>, Vec<String>), BuildError> {
        let addresses = match self {
            Self::CreateContract(a) => contract_addresses(&a.name, &a.version),
            Self::DeleteContract(a) => contract_addresses(&a.name, &a.version),
            Self::ExecuteContract(a) => {
                let (mut inputs, mut outputs) = contract_addresses(&a.name, &a.version);
                extend_guarded(&mut inputs, &a.inputs)?;
                extend_guarded(&mut outputs, &a.outputs)?;
                (inputs, outputs)
            }
            Self::CreateContractRegistry(a) => {
                administered(compute_contract_registry_address(&a.name))
            }
            Self::DeleteContractRegistry(a) => {
                administered(compute_contract_registry_address(&a.name))
            }
            Self::UpdateContractRegistryOwners(a) => {
                administered(compute_contract_registry_address(&a.name))
            }
            Self::CreateNamespaceRegistry(a) => {
                administered(compute_namespace_registry_address(&a.namespace)?)
            }
            Self::DeleteNamespaceRegistry(a) => {
                administered(compute_namespace_registry_address(&a.namespace)?)
            }
            Self::UpdateNamespaceRegistryOwners(a) => {
                administered(compute_namespace_registry_address(&a.namespace)?)
            }
            Self::CreateNamespaceRegistryPermission(a) => {
                administered(compute_namespace_registry_address(&a.namespace)?)
            }
            Self::DeleteNamespaceRegistryPermission(a) => {
                administered(compute_namespace_registry_address(&a.namespace)?)
            }
            Self::CreateSmartPermission(a) => smart_permission_addresses(&a.org_id, &a.name),
            Self::UpdateSmartPermission(a) => smart_permission_addresses(&a.org_id, &a.name),
            Self::DeleteSmartPermission(a) => smart_permission_addresses(&a.org_id, &a.name),
        };
        Ok(addresses)
    }
}

// ---------------------------------------------------------------------------
// Address helpers
// ---------------------------------------------------------------------------

fn contract_addresses(name: &str, version: &str) -> (Vec<String>, Vec<String>) {
    let addresses = vec![
        compute_contract_registry_address(name),
        compute_contract_address(name, version),
    ];
    (addresses.clone(), addresses)
}

/// Appends the namespace registry of each address, then the addresses.
fn extend_guarded(into: &mut Vec<String>, declared: &[String]) -> Result<(), BuildError> {
    for address in declared {
        let registry = compute_namespace_registry_address(address)?;
        if !into.contains(&registry) {
            into.push(registry);
        }
    }
    for address in declared {
        if !into.contains(address) {
            into.push(address.clone());
        }
    }
    Ok(())
}

fn administered(record: String) -> (Vec<String>, Vec<String>) {
    (
        vec![
            record.clone(),
            compute_setting_address(ADMINISTRATORS_SETTING_KEY),
        ],
        vec![record],
    )
}

fn smart_permission_addresses(org_id: &str, name: &str) -> (Vec<String>, Vec<String>) {
    let permission = compute_smart_permission_address(org_id, name);
    (
        vec![compute_org_address(org_id), permission.clone()],
        vec![permission],
    )
}

// ---------------------------------------------------------------------------
// Wire conversions
// ---------------------------------------------------------------------------

impl From<SabrePayload> for wire::SabrePayload {
    fn from(payload: SabrePayload) -> Self {
        let mut out = wire::SabrePayload {
            action: payload.action().as_i32(),
            ..Default::default()
        };
        match payload {
            SabrePayload::CreateContract(a) => out.create_contract = Some(a),
            SabrePayload::DeleteContract(a) => out.delete_contract = Some(a),
            SabrePayload::ExecuteContract(a) => out.execute_contract = Some(a),
            SabrePayload::CreateContractRegistry(a) => out.create_contract_registry = Some(a),
            SabrePayload::DeleteContractRegistry(a) => out.delete_contract_registry = Some(a),
            SabrePayload::UpdateContractRegistryOwners(a) => {
                out.update_contract_registry_owners = Some(a)
            }
            SabrePayload::CreateNamespaceRegistry(a) => out.create_namespace_registry = Some(a),
            SabrePayload::DeleteNamespaceRegistry(a) => out.delete_namespace_registry = Some(a),
            SabrePayload::UpdateNamespaceRegistryOwners(a) => {
                out.update_namespace_registry_owners = Some(a)
            }
            SabrePayload::CreateNamespaceRegistryPermission(a) => {
                out.create_namespace_registry_permission = Some(a)
            }
            SabrePayload::DeleteNamespaceRegistryPermission(a) => {
                out.delete_namespace_registry_permission = Some(a)
            }
            SabrePayload::CreateSmartPermission(a) => out.create_smart_permission = Some(a),
            SabrePayload::UpdateSmartPermission(a) => out.update_smart_permission = Some(a),
            SabrePayload::DeleteSmartPermission(a) => out.delete_smart_permission = Some(a),
        }
        out
    }
}

impl TryFrom<wire::SabrePayload> for SabrePayload {
    type Error = BuildError;

    fn try_from(payload: wire::SabrePayload) -> Result<Self, Self::Error> {
        let action = Action::try_from(payload.action)?;
        let mismatch = || BuildError::MismatchedPayload {
            action: action.as_str_name(),
        };
        let built = match action {
            Action::CreateContract => payload.create_contract.map(Self::CreateContract),
            Action::DeleteContract => payload.delete_contract.map(Self::DeleteContract),
            Action::ExecuteContract => payload.execute_contract.map(Self::ExecuteContract),
            Action::CreateContractRegistry => payload
                .create_contract_registry
                .map(Self::CreateContractRegistry),
            Action::DeleteContractRegistry => payload
                .delete_contract_registry
                .map(Self::DeleteContractRegistry),
            Action::UpdateContractRegistryOwners => payload
                .update_contract_registry_owners
                .map(Self::UpdateContractRegistryOwners),
            Action::CreateNamespaceRegistry => payload
                .create_namespace_registry
                .map(Self::CreateNamespaceRegistry),
            Action::DeleteNamespaceRegistry => payload
                .delete_namespace_registry
                .map(Self::DeleteNamespaceRegistry),
            Action::UpdateNamespaceRegistryOwners => payload
                .update_namespace_registry_owners
                .map(Self::UpdateNamespaceRegistryOwners),
            Action::CreateNamespaceRegistryPermission => payload
                .create_namespace_registry_permission
                .map(Self::CreateNamespaceRegistryPermission),
            Action::DeleteNamespaceRegistryPermission => payload
                .delete_namespace_registry_permission
                .map(Self::DeleteNamespaceRegistryPermission),
            Action::CreateSmartPermission => payload
                .create_smart_permission
                .map(Self::CreateSmartPermission),
            Action::UpdateSmartPermission => payload
                .update_smart_permission
                .map(Self::UpdateSmartPermission),
            Action::DeleteSmartPermission => payload
                .delete_smart_permission
                .map(Self::DeleteSmartPermission),
        };
        built.ok_or_else(mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::compute_deployment_address;

    fn execute_xo() -> SabrePayload {
        let game = compute_deployment_address("xo", "game1");
        SabrePayload::ExecuteContract(wire::ExecuteContractAction {
            name: "xo".into(),
            version: "0.3.3".into(),
            inputs: vec![game.clone()],
            outputs: vec![game],
            payload: b"game1,take,1".to_vec(),
        })
    }

    #[test]
    fn bytes_roundtrip() {
        let payload = execute_xo();
        let bytes = payload.to_bytes().unwrap();
        assert_eq!(SabrePayload::from_bytes(&bytes).unwrap(), payload);
    }

    #[test]
    fn wire_form_populates_only_matching_field() {
        let wire_payload = wire::SabrePayload::from(execute_xo());
        assert_eq!(wire_payload.action, 3);
        assert!(wire_payload.execute_contract.is_some());
        assert!(wire_payload.create_contract.is_none());
        assert!(wire_payload.delete_smart_permission.is_none());
    }

    #[test]
    fn unset_action_is_missing() {
        let err = SabrePayload::try_from(wire::SabrePayload::default()).unwrap_err();
        assert!(matches!(err, BuildError::MissingField("action")));
    }

    #[test]
    fn unknown_action_is_unrecognized() {
        let wire_payload = wire::SabrePayload {
            action: 99,
            ..Default::default()
        };
        let err = SabrePayload::try_from(wire_payload).unwrap_err();
        assert!(matches!(err, BuildError::UnrecognizedAction(99)));
    }

    #[test]
    fn body_for_wrong_action_is_mismatched() {
        let wire_payload = wire::SabrePayload {
            action: Action::DeleteContract.as_i32(),
            create_contract: Some(wire::CreateContractAction::default()),
            ..Default::default()
        };
        let err = SabrePayload::try_from(wire_payload).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MismatchedPayload {
                action: "DELETE_CONTRACT"
            }
        ));
    }

    #[test]
    fn execute_contract_addresses_cover_registries_and_state() {
        let game = compute_deployment_address("xo", "game1");
        let (inputs, outputs) = execute_xo().state_addresses().unwrap();

        let expected = vec![
            compute_contract_registry_address("xo"),
            compute_contract_address("xo", "0.3.3"),
            compute_namespace_registry_address(&game).unwrap(),
            game,
        ];
        assert_eq!(inputs, expected);
        assert_eq!(outputs, expected);
    }

    #[test]
    fn shared_namespace_registry_listed_once() {
        let a = compute_deployment_address("xo", "game1");
        let b = compute_deployment_address("xo", "game2");
        let payload = SabrePayload::ExecuteContract(wire::ExecuteContractAction {
            name: "xo".into(),
            version: "0.3.3".into(),
            inputs: vec![a.clone(), b.clone()],
            outputs: vec![a],
            payload: vec![1],
        });
        let (inputs, _) = payload.state_addresses().unwrap();
        assert_eq!(inputs.len(), 5);
        assert!(inputs.contains(&b));
    }

    #[test]
    fn short_declared_input_fails_addressing() {
        let payload = SabrePayload::ExecuteContract(wire::ExecuteContractAction {
            name: "xo".into(),
            version: "0.3.3".into(),
            inputs: vec!["abc".into()],
            outputs: vec![],
            payload: vec![1],
        });
        assert!(matches!(
            payload.state_addresses(),
            Err(BuildError::InvalidAddress(_))
        ));
    }

    #[test]
    fn registry_actions_read_administrators_setting() {
        let payload =
            SabrePayload::DeleteContractRegistry(wire::DeleteContractRegistryAction {
                name: "xo".into(),
            });
        let (inputs, outputs) = payload.state_addresses().unwrap();
        assert_eq!(
            inputs,
            vec![
                compute_contract_registry_address("xo"),
                compute_setting_address(ADMINISTRATORS_SETTING_KEY),
            ]
        );
        assert_eq!(outputs, vec![compute_contract_registry_address("xo")]);
    }

    #[test]
    fn smart_permission_reads_org() {
        let payload = SabrePayload::DeleteSmartPermission(wire::DeleteSmartPermissionAction {
            name: "can_ship".into(),
            org_id: "acme".into(),
        });
        let (inputs, outputs) = payload.state_addresses().unwrap();
        assert_eq!(inputs[0], compute_org_address("acme"));
        assert_eq!(
            outputs,
            vec![compute_smart_permission_address("acme", "can_ship")]
        );
    }
}

//! Payload construction via the builder pattern.
//!
//! [`SabrePayloadBuilder`] accumulates every field any action might need.
//! `build()` then dispatches on the configured [`Action`] to one
//! constructor per action, each of which checks its own required fields in
//! a fixed order and reports the first one missing.
//!
//! The builder is single-writer: configure it from one place, then build
//! as many times as you like. Building does not consume or alter it.

use super::action::Action;
use super::payload::SabrePayload;
use crate::error::BuildError;
use crate::protos::sabre as wire;

/// Something that can produce a [`SabrePayload`] on demand.
///
/// [`SabreTransactionBuilder`](super::SabreTransactionBuilder) holds one of
/// these. A finished [`SabrePayload`] implements it trivially.
pub trait BuildPayload {
    fn build_payload(&self) -> Result<SabrePayload, BuildError>;
}

// ---------------------------------------------------------------------------
// SabrePayloadBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SabrePayload`] values.
///
/// # Usage
///
/// ```rust
/// use transact_sdk::sabre::{Action, SabrePayloadBuilder};
///
/// let payload = SabrePayloadBuilder::new()
///     .with_action(Action::ExecuteContract)
///     .with_contract_name("xo")
///     .with_contract_version("0.3.3")
///     .with_execute_contract_payload(b"game1,take,1".to_vec())
///     .build()
///     .unwrap();
/// assert_eq!(payload.action(), Action::ExecuteContract);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SabrePayloadBuilder {
    action: Option<Action>,
    contract_name: String,
    contract_version: String,
    contract: Vec<u8>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    execute_contract_payload: Vec<u8>,
    owners: Vec<String>,
    namespace: String,
    read: bool,
    write: bool,
    smart_permission_name: String,
    org_id: String,
    smart_permission_function: Vec<u8>,
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl SabrePayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Setters ----

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_contract_name(mut self, name: impl Into<String>) -> Self {
        self.contract_name = name.into();
        self
    }

    pub fn with_contract_version(mut self, version: impl Into<String>) -> Self {
        self.contract_version = version.into();
        self
    }

    /// The compiled contract, for `CREATE_CONTRACT`.
    pub fn with_contract(mut self, contract: impl Into<Vec<u8>>) -> Self {
        self.contract = contract.into();
        self
    }

    /// Addresses or namespaces the contract reads.
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = strings(inputs);
        self
    }

    /// Addresses or namespaces the contract writes.
    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = strings(outputs);
        self
    }

    /// The bytes handed to the contract by `EXECUTE_CONTRACT`.
    pub fn with_execute_contract_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.execute_contract_payload = payload.into();
        self
    }

    /// Public keys (hex) that own a contract or namespace registry.
    pub fn with_owners<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owners = strings(owners);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_read_permission(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn with_write_permission(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    pub fn with_smart_permission_name(mut self, name: impl Into<String>) -> Self {
        self.smart_permission_name = name.into();
        self
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    /// The compiled smart permission function.
    pub fn with_smart_permission_function(mut self, function: impl Into<Vec<u8>>) -> Self {
        self.smart_permission_function = function.into();
        self
    }

    // ---- Getters ----

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn contract_version(&self) -> &str {
        &self.contract_version
    }

    pub fn contract(&self) -> &[u8] {
        &self.contract
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn execute_contract_payload(&self) -> &[u8] {
        &self.execute_contract_payload
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn read_permission(&self) -> bool {
        self.read
    }

    pub fn write_permission(&self) -> bool {
        self.write
    }

    pub fn smart_permission_name(&self) -> &str {
        &self.smart_permission_name
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    pub fn smart_permission_function(&self) -> &[u8] {
        &self.smart_permission_function
    }

    // ---- Build ----

    /// Validates the fields the configured action requires and produces
    /// the payload.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingField`] naming `"action"` when no action is set,
    /// otherwise the first required field of that action that is empty.
    pub fn build(&self) -> Result<SabrePayload, BuildError> {
        let action = self.action.ok_or(BuildError::MissingField("action"))?;
        match action {
            Action::CreateContract => self.create_contract(),
            Action::DeleteContract => self.delete_contract(),
            Action::ExecuteContract => self.execute_contract(),
            Action::CreateContractRegistry => self.create_contract_registry(),
            Action::DeleteContractRegistry => self.delete_contract_registry(),
            Action::UpdateContractRegistryOwners => self.update_contract_registry_owners(),
            Action::CreateNamespaceRegistry => self.create_namespace_registry(),
            Action::DeleteNamespaceRegistry => self.delete_namespace_registry(),
            Action::UpdateNamespaceRegistryOwners => self.update_namespace_registry_owners(),
            Action::CreateNamespaceRegistryPermission => {
                self.create_namespace_registry_permission()
            }
            Action::DeleteNamespaceRegistryPermission => {
                self.delete_namespace_registry_permission()
            }
            Action::CreateSmartPermission => self.create_smart_permission(),
            Action::UpdateSmartPermission => self.update_smart_permission(),
            Action::DeleteSmartPermission => self.delete_smart_permission(),
        }
    }

    // ---- Per-action constructors ----

    fn create_contract(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::CreateContract(wire::CreateContractAction {
            name: required_str(&self.contract_name, "contract name")?,
            version: required_str(&self.contract_version, "contract version")?,
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            contract: required_bytes(&self.contract, "contract")?,
        }))
    }

    fn delete_contract(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::DeleteContract(wire::DeleteContractAction {
            name: required_str(&self.contract_name, "contract name")?,
            version: required_str(&self.contract_version, "contract version")?,
        }))
    }

    fn execute_contract(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::ExecuteContract(wire::ExecuteContractAction {
            name: required_str(&self.contract_name, "contract name")?,
            version: required_str(&self.contract_version, "contract version")?,
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            payload: required_bytes(
                &self.execute_contract_payload,
                "execute contract payload",
            )?,
        }))
    }

    fn create_contract_registry(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::CreateContractRegistry(
            wire::CreateContractRegistryAction {
                name: required_str(&self.contract_name, "contract name")?,
                owners: required_list(&self.owners, "owners")?,
            },
        ))
    }

    fn delete_contract_registry(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::DeleteContractRegistry(
            wire::DeleteContractRegistryAction {
                name: required_str(&self.contract_name, "contract name")?,
            },
        ))
    }

    fn update_contract_registry_owners(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::UpdateContractRegistryOwners(
            wire::UpdateContractRegistryOwnersAction {
                name: required_str(&self.contract_name, "contract name")?,
                owners: required_list(&self.owners, "owners")?,
            },
        ))
    }

    fn create_namespace_registry(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::CreateNamespaceRegistry(
            wire::CreateNamespaceRegistryAction {
                namespace: required_str(&self.namespace, "namespace")?,
                owners: required_list(&self.owners, "owners")?,
            },
        ))
    }

    fn delete_namespace_registry(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::DeleteNamespaceRegistry(
            wire::DeleteNamespaceRegistryAction {
                namespace: required_str(&self.namespace, "namespace")?,
            },
        ))
    }

    fn update_namespace_registry_owners(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::UpdateNamespaceRegistryOwners(
            wire::UpdateNamespaceRegistryOwnersAction {
                namespace: required_str(&self.namespace, "namespace")?,
                owners: required_list(&self.owners, "owners")?,
            },
        ))
    }

    fn create_namespace_registry_permission(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::CreateNamespaceRegistryPermission(
            wire::CreateNamespaceRegistryPermissionAction {
                namespace: required_str(&self.namespace, "namespace")?,
                contract_name: required_str(&self.contract_name, "contract name")?,
                read: self.read,
                write: self.write,
            },
        ))
    }

    fn delete_namespace_registry_permission(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::DeleteNamespaceRegistryPermission(
            wire::DeleteNamespaceRegistryPermissionAction {
                namespace: required_str(&self.namespace, "namespace")?,
                contract_name: required_str(&self.contract_name, "contract name")?,
            },
        ))
    }

    fn create_smart_permission(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::CreateSmartPermission(
            wire::CreateSmartPermissionAction {
                name: required_str(&self.smart_permission_name, "smart permission name")?,
                org_id: required_str(&self.org_id, "org id")?,
                function: required_bytes(&self.smart_permission_function, "function")?,
            },
        ))
    }

    fn update_smart_permission(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::UpdateSmartPermission(
            wire::UpdateSmartPermissionAction {
                name: required_str(&self.smart_permission_name, "smart permission name")?,
                org_id: required_str(&self.org_id, "org id")?,
                function: required_bytes(&self.smart_permission_function, "function")?,
            },
        ))
    }

    fn delete_smart_permission(&self) -> Result<SabrePayload, BuildError> {
        Ok(SabrePayload::DeleteSmartPermission(
            wire::DeleteSmartPermissionAction {
                name: required_str(&self.smart_permission_name, "smart permission name")?,
                org_id: required_str(&self.org_id, "org id")?,
            },
        ))
    }
}

impl BuildPayload for SabrePayloadBuilder {
    fn build_payload(&self) -> Result<SabrePayload, BuildError> {
        self.build()
    }
}

impl BuildPayload for SabrePayload {
    fn build_payload(&self) -> Result<SabrePayload, BuildError> {
        Ok(self.clone())
    }
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn required_str(value: &str, field: &'static str) -> Result<String, BuildError> {
    if value.is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(value.to_string())
}

fn required_bytes(value: &[u8], field: &'static str) -> Result<Vec<u8>, BuildError> {
    if value.is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(value.to_vec())
}

fn required_list(value: &[String], field: &'static str) -> Result<Vec<String>, BuildError> {
    if value.is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(value.to_vec())
}

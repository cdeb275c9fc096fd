//! Sabre payload messages.
//!
//! On the wire a payload is a flat message with an `action` discriminant
//! and one optional field per action. Only the field matching `action` is
//! ever populated; [`crate::sabre::SabrePayload`] is the tagged form the
//! builders work with.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SabrePayload {
    /// Numeric value of [`crate::sabre::Action`]; 0 means unset.
    #[prost(int32, tag = "1")]
    pub action: i32,
    #[prost(message, optional, tag = "2")]
    pub create_contract: Option<CreateContractAction>,
    #[prost(message, optional, tag = "3")]
    pub delete_contract: Option<DeleteContractAction>,
    #[prost(message, optional, tag = "4")]
    pub execute_contract: Option<ExecuteContractAction>,
    #[prost(message, optional, tag = "5")]
    pub create_contract_registry: Option<CreateContractRegistryAction>,
    #[prost(message, optional, tag = "6")]
    pub delete_contract_registry: Option<DeleteContractRegistryAction>,
    #[prost(message, optional, tag = "7")]
    pub update_contract_registry_owners: Option<UpdateContractRegistryOwnersAction>,
    #[prost(message, optional, tag = "8")]
    pub create_namespace_registry: Option<CreateNamespaceRegistryAction>,
    #[prost(message, optional, tag = "9")]
    pub delete_namespace_registry: Option<DeleteNamespaceRegistryAction>,
    #[prost(message, optional, tag = "10")]
    pub update_namespace_registry_owners: Option<UpdateNamespaceRegistryOwnersAction>,
    #[prost(message, optional, tag = "11")]
    pub create_namespace_registry_permission: Option<CreateNamespaceRegistryPermissionAction>,
    #[prost(message, optional, tag = "12")]
    pub delete_namespace_registry_permission: Option<DeleteNamespaceRegistryPermissionAction>,
    #[prost(message, optional, tag = "13")]
    pub create_smart_permission: Option<CreateSmartPermissionAction>,
    #[prost(message, optional, tag = "14")]
    pub update_smart_permission: Option<UpdateSmartPermissionAction>,
    #[prost(message, optional, tag = "15")]
    pub delete_smart_permission: Option<DeleteSmartPermissionAction>,
}

// ---------------------------------------------------------------------------
// Contract actions
// ---------------------------------------------------------------------------

/// Uploads a new contract version.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    /// Namespaces the contract may read.
    #[prost(string, repeated, tag = "3")]
    pub inputs: Vec<String>,
    /// Namespaces the contract may write.
    #[prost(string, repeated, tag = "4")]
    pub outputs: Vec<String>,
    /// The compiled contract.
    #[prost(bytes = "vec", tag = "5")]
    pub contract: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
}

/// Runs a stored contract against `payload`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ExecuteContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, repeated, tag = "3")]
    pub inputs: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub outputs: Vec<String>,
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Contract registry actions
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateContractRegistryAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteContractRegistryAction {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct UpdateContractRegistryOwnersAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

// ---------------------------------------------------------------------------
// Namespace registry actions
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateNamespaceRegistryAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteNamespaceRegistryAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct UpdateNamespaceRegistryOwnersAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, repeated, tag = "2")]
    pub owners: Vec<String>,
}

/// Grants `contract_name` read and/or write access to `namespace`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateNamespaceRegistryPermissionAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub contract_name: String,
    #[prost(bool, tag = "3")]
    pub read: bool,
    #[prost(bool, tag = "4")]
    pub write: bool,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteNamespaceRegistryPermissionAction {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub contract_name: String,
}

// ---------------------------------------------------------------------------
// Smart permission actions
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateSmartPermissionAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub org_id: String,
    #[prost(bytes = "vec", tag = "3")]
    pub function: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct UpdateSmartPermissionAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub org_id: String,
    #[prost(bytes = "vec", tag = "3")]
    pub function: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteSmartPermissionAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub org_id: String,
}

//! The fourteen Sabre actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::BuildError;

/// What a Sabre payload asks the node to do.
///
/// Discriminants are the wire values of the `action` field. `0` is the
/// wire's "unset" value and has no variant here: a builder with no action
/// simply holds `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    CreateContract = 1,
    DeleteContract = 2,
    ExecuteContract = 3,
    CreateContractRegistry = 4,
    DeleteContractRegistry = 5,
    UpdateContractRegistryOwners = 6,
    CreateNamespaceRegistry = 7,
    DeleteNamespaceRegistry = 8,
    UpdateNamespaceRegistryOwners = 9,
    CreateNamespaceRegistryPermission = 10,
    DeleteNamespaceRegistryPermission = 11,
    CreateSmartPermission = 12,
    UpdateSmartPermission = 13,
    DeleteSmartPermission = 14,
}

impl Action {
    /// Every action, in wire order.
    pub const ALL: [Action; 14] = [
        Action::CreateContract,
        Action::DeleteContract,
        Action::ExecuteContract,
        Action::CreateContractRegistry,
        Action::DeleteContractRegistry,
        Action::UpdateContractRegistryOwners,
        Action::CreateNamespaceRegistry,
        Action::DeleteNamespaceRegistry,
        Action::UpdateNamespaceRegistryOwners,
        Action::CreateNamespaceRegistryPermission,
        Action::DeleteNamespaceRegistryPermission,
        Action::CreateSmartPermission,
        Action::UpdateSmartPermission,
        Action::DeleteSmartPermission,
    ];

    /// The wire value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// The protocol's name for the action, e.g. `EXECUTE_CONTRACT`.
    pub fn as_str_name(self) -> &'static str {
        match self {
            Self::CreateContract => "CREATE_CONTRACT",
            Self::DeleteContract => "DELETE_CONTRACT",
            Self::ExecuteContract => "EXECUTE_CONTRACT",
            Self::CreateContractRegistry => "CREATE_CONTRACT_REGISTRY",
            Self::DeleteContractRegistry => "DELETE_CONTRACT_REGISTRY",
            Self::UpdateContractRegistryOwners => "UPDATE_CONTRACT_REGISTRY_OWNERS",
            Self::CreateNamespaceRegistry => "CREATE_NAMESPACE_REGISTRY",
            Self::DeleteNamespaceRegistry => "DELETE_NAMESPACE_REGISTRY",
            Self::UpdateNamespaceRegistryOwners => "UPDATE_NAMESPACE_REGISTRY_OWNERS",
            Self::CreateNamespaceRegistryPermission => "CREATE_NAMESPACE_REGISTRY_PERMISSION",
            Self::DeleteNamespaceRegistryPermission => "DELETE_NAMESPACE_REGISTRY_PERMISSION",
            Self::CreateSmartPermission => "CREATE_SMART_PERMISSION",
            Self::UpdateSmartPermission => "UPDATE_SMART_PERMISSION",
            Self::DeleteSmartPermission => "DELETE_SMART_PERMISSION",
        }
    }
}

impl TryFrom<i32> for Action {
    type Error = BuildError;

    /// `0` (unset) reports the missing action; any other value outside the
    /// known range is unrecognized.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(BuildError::MissingField("action"));
        }
        Action::ALL
            .into_iter()
            .find(|action| action.as_i32() == value)
            .ok_or(BuildError::UnrecognizedAction(value))
    }
}

/// A string that is not the protocol name of any action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized action name: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses a protocol name such as `EXECUTE_CONTRACT`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

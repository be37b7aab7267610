//! Resource parameters
//!
//! The parameter set handed to the schema compiler and persisted as
//! `parameters.json`. Only two keys are interpreted; the rest ride along.

use crate::error::{read_json, write_json, ProjectResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

/// Key holding the API name
pub const API_NAME_KEY: &str = "AppSyncApiName";

/// Key holding the user-pool reference
pub const USER_POOL_ID_KEY: &str = "AuthCognitoUserPoolId";

/// Attribute of an identity provider exposing its user pool id
pub const USER_POOL_ID_ATTRIBUTE: &str = "Outputs.UserPoolId";

/// Deferred lookup of another resource's output attribute
///
/// Resolved later by infrastructure templating; serialized as
/// `{"Fn::GetAtt": [logical_id, attribute]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrossResourceRef {
    /// Logical id of the referenced resource, e.g. `authcognito1234`
    pub logical_id: String,
    /// Output attribute on that resource
    pub attribute: String,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetAtt {
    #[serde(rename = "Fn::GetAtt")]
    get_att: (String, String),
}

impl CrossResourceRef {
    /// Create reference
    #[inline]
    #[must_use]
    pub fn new(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Reference to the user pool id of an `auth` resource
    #[must_use]
    pub fn user_pool_id(auth_resource: &str) -> Self {
        Self::new(format!("auth{auth_resource}"), USER_POOL_ID_ATTRIBUTE)
    }
}

impl Serialize for CrossResourceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GetAtt {
            get_att: (self.logical_id.clone(), self.attribute.clone()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CrossResourceRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let GetAtt {
            get_att: (logical_id, attribute),
        } = GetAtt::deserialize(deserializer)?;
        Ok(Self {
            logical_id,
            attribute,
        })
    }
}

/// Value of `AuthCognitoUserPoolId`
///
/// Files written by hand or by other tools may hold a literal pool id or
/// some other shape; those are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserPoolId {
    /// Deferred reference to an identity provider's output
    Reference(CrossResourceRef),
    /// Any other JSON value
    Literal(Value),
}

impl From<CrossResourceRef> for UserPoolId {
    fn from(reference: CrossResourceRef) -> Self {
        Self::Reference(reference)
    }
}

/// Parameter set of a GraphQL API resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceParameters {
    /// Name of the API
    #[serde(rename = "AppSyncApiName", default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    /// User pool backing the API when user-pool auth is on
    #[serde(
        rename = "AuthCognitoUserPoolId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_pool_id: Option<UserPoolId>,
    /// Parameters the wizard does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceParameters {
    /// Fresh parameter set for an API name
    #[inline]
    #[must_use]
    pub fn for_api(api_name: impl Into<String>) -> Self {
        Self {
            api_name: Some(api_name.into()),
            ..Self::default()
        }
    }

    /// Load from `path`
    pub fn load(path: &Path) -> ProjectResult<Self> {
        read_json(path)
    }

    /// Write to `path`, two-space indented
    pub fn save(&self, path: &Path) -> ProjectResult<()> {
        write_json(path, self, b"  ")
    }

    /// Point the API at a user pool
    pub fn set_user_pool(&mut self, reference: CrossResourceRef) {
        self.user_pool_id = Some(reference.into());
    }

    /// Drop any user-pool reference; returns whether one was present
    pub fn clear_user_pool(&mut self) -> bool {
        self.user_pool_id.take().is_some()
    }

    /// The user-pool reference, if it is one this wizard wrote
    #[must_use]
    pub fn user_pool_reference(&self) -> Option<&CrossResourceRef> {
        match self.user_pool_id.as_ref()? {
            UserPoolId::Reference(reference) => Some(reference),
            UserPoolId::Literal(_) => None,
        }
    }

    /// Whether a user-pool reference is set
    #[inline]
    #[must_use]
    pub fn has_user_pool(&self) -> bool {
        self.user_pool_id.is_some()
    }
}

//! Authorization selection
//!
//! Asks which authorization mode the API uses and keeps the parameter set
//! consistent with the answer:
//!
//! - **User pool**: reuse the project's identity provider, or create one
//!   through the [`IdentityProvider`] plugin, and reference its pool id.
//! - **API key**: drop any user-pool reference.

use crate::error::{ProviderError, WalkthroughError, WalkthroughResult};
use crate::prompt::{ask_select, Terminal};
use crate::question::{Choice, Question};
use gqlapi_project::{CrossResourceRef, Project, ResourceParameters, AUTH_CATEGORY, COGNITO_SERVICE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization mode of the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMode {
    /// Requests carry an API key
    #[serde(rename = "API_KEY")]
    ApiKey,
    /// Requests carry a user-pool token
    #[serde(rename = "AMAZON_COGNITO_USER_POOLS")]
    UserPools,
}

impl AuthMode {
    /// Every mode, in prompt order
    pub const ALL: [AuthMode; 2] = [AuthMode::ApiKey, AuthMode::UserPools];

    /// Wire tag
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiKey => "API_KEY",
            Self::UserPools => "AMAZON_COGNITO_USER_POOLS",
        }
    }

    /// Label shown to the operator
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "API key",
            Self::UserPools => "Amazon Cognito User Pool",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = WalkthroughError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| WalkthroughError::UnknownAuthMode(s.to_string()))
    }
}

/// Plugin able to add an identity provider to the project
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an identity provider and return its resource name
    async fn add(&self, project: &Project) -> Result<String, ProviderError>;
}

/// The authorization question
#[must_use]
pub fn auth_question() -> Question {
    Question::list(
        "authType",
        "Choose an authorization type for the API",
        AuthMode::ALL
            .iter()
            .map(|m| Choice::new(m.label(), m.as_str()))
            .collect(),
    )
}

/// Chooses the authorization mode and updates parameters accordingly
pub struct AuthSelector<'a> {
    project: &'a Project,
    terminal: &'a dyn Terminal,
    identity: &'a dyn IdentityProvider,
}

impl<'a> AuthSelector<'a> {
    /// Create selector
    #[must_use]
    pub fn new(
        project: &'a Project,
        terminal: &'a dyn Terminal,
        identity: &'a dyn IdentityProvider,
    ) -> Self {
        Self {
            project,
            terminal,
            identity,
        }
    }

    /// Ask for the mode and apply it to `parameters`
    pub async fn select(&self, parameters: &mut ResourceParameters) -> WalkthroughResult<AuthMode> {
        let question = auth_question();
        let mode: AuthMode = ask_select(self.terminal, &question).await?.value.parse()?;
        tracing::debug!("Authorization mode selected: {}", mode);

        match mode {
            AuthMode::UserPools => {
                if let Some(provider) = self.resolve_identity_provider().await? {
                    parameters.set_user_pool(CrossResourceRef::user_pool_id(&provider));
                }
            }
            AuthMode::ApiKey => {
                if parameters.clear_user_pool() {
                    tracing::debug!("Removed stale user pool reference");
                }
            }
        }

        Ok(mode)
    }

    /// Existing identity provider, or a freshly added one
    ///
    /// `None` when none exists and the plugin could not add one.
    async fn resolve_identity_provider(&self) -> WalkthroughResult<Option<String>> {
        let meta = self.project.load_meta()?;
        if let Some(existing) = meta.find_last(AUTH_CATEGORY, COGNITO_SERVICE) {
            self.terminal
                .info("Using cognito user pool configured as a part of this project");
            return Ok(Some(existing.to_string()));
        }

        match self.identity.add(self.project).await {
            Ok(name) => {
                tracing::info!("Added identity provider {}", name);
                Ok(Some(name))
            }
            Err(ProviderError::NotInstalled) => {
                self.terminal.error(
                    "Auth plugin not installed in the CLI. Please install it to use this feature",
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("Identity provider creation failed: {}", e);
                self.terminal
                    .error(&format!("Could not add a user pool to the project: {e}"));
                Ok(None)
            }
        }
    }
}

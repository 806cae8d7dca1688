//! Policy domain type.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A configuration policy with an ordered list of rule strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Policy {
    /// Unique identifier.
    pub id: String,
    /// Policy name.
    pub name: String,
    /// What the policy covers.
    pub description: String,
    /// Ordered rule strings.
    pub rules: Vec<String>,
    /// Whether the policy is in effect.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Policy {
    /// Create an enabled policy.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rules: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            rules,
            enabled: default_enabled(),
        }
    }
}

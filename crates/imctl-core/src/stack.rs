//! Stack catalogue domain types
//!
//! Field names follow the instance manager's JSON, so the same types are
//! decoded from the wire and pretty-printed as detail text.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity shared by a [`CatalogueEntry`] and its [`StackDetail`]
pub type StackId = u64;

/// One deployable stack template as listed by `GET /stacks/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    #[serde(rename = "ID")]
    pub id: StackId,
    pub name: String,
}

impl CatalogueEntry {
    pub fn new(id: StackId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// List label, e.g. `DHIS2 (1)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Parameter that may be omitted when deploying; the service fills in the default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalParameter {
    #[serde(rename = "ID")]
    pub id: StackId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "DefaultValue")]
    pub default_value: String,
}

/// Parameter that must be supplied when deploying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredParameter {
    #[serde(rename = "ID")]
    pub id: StackId,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Parameter schema of one stack, as returned by `GET /stacks/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDetail {
    #[serde(rename = "ID")]
    pub id: StackId,
    pub name: String,
    #[serde(rename = "optionalParameters", default)]
    pub optional_parameters: Vec<OptionalParameter>,
    #[serde(rename = "requiredParameters", default)]
    pub required_parameters: Vec<RequiredParameter>,
}

impl StackDetail {
    /// Render as indented JSON, the form shown in the detail pane
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

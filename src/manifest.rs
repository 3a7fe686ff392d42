use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::params::ParamMap;

pub type Str = CompactString;

/// The owning resource for a set of generators. Read-only input to
/// generation; the generators themselves never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSet {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ParamSetSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSetSpec {
    /// Selects the go-template dialect: parameter records keep their nested
    /// structure instead of being flattened to string-keyed string values.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub go_template: bool,
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub generators: Box<[GeneratorSpec]>,
    #[serde(default)]
    pub template: Template,
}

/// Configuration for one generator invocation. Exactly one kind field is
/// populated per instance; the caller asserts this, not the generators.
/// Network-backed kinds (git, clusters, ...) live behind the same contract
/// but are not part of this crate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListGeneratorSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListGeneratorSpec {
    /// Order-significant; each element is an opaque encoded document that is
    /// only decoded at generation time.
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub elements: Box<[RawElement]>,
    /// A single YAML document encoding an additional sequence of mappings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub elements_yaml: String,
    /// Per-generator template override. The caller merges it with the
    /// set-level template; generators never interpret it.
    #[serde(default)]
    pub template: Template,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Str::is_empty")]
    pub name: Str,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Str>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<Str, Str>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub annotations: IndexMap<Str, Str>,
}

/// An opaque encoded document held as canonical JSON text. In a manifest it
/// captures whatever structured value was written; decoding is deferred to
/// generation time so bad payloads fail there, not at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement(Box<str>);

impl RawElement {
    pub fn new(raw: impl Into<Box<str>>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Decode into a generic mapping. Non-mapping documents are a decode
    /// failure, same as malformed syntax.
    pub fn decode(&self) -> Result<ParamMap, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}

impl From<serde_json::Value> for RawElement {
    fn from(value: serde_json::Value) -> Self {
        Self(value.to_string().into())
    }
}

impl From<&str> for RawElement {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl Serialize for RawElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value: serde_json::Value =
            serde_json::from_str(&self.0).map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self(value.to_string().into()))
    }
}

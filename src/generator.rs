mod list;

pub use self::list::ListGenerator;

use core::fmt;
use std::time::Duration;

use crate::manifest::{GeneratorSpec, ParamSet, Template};
use crate::params::ParamMap;

/// The contract every generator variant implements. Callers are agnostic to
/// which variant produced a result. Implementations must not retain or
/// mutate state across calls; a single instance may be shared process-wide.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Expand `spec` into an ordered sequence of parameter records. Neither
    /// `spec` nor `param_set` is mutated, and no partial sequence is ever
    /// returned alongside an error.
    async fn generate_params(
        &self,
        spec: &GeneratorSpec,
        param_set: &ParamSet,
        cluster: Option<&dyn ClusterAccess>,
    ) -> Result<Vec<ParamMap>, GenerateError>;

    /// Borrow the variant's template override out of `spec`. The caller
    /// merges it with the set-level template; the generator never does.
    fn template<'a>(&self, spec: &'a GeneratorSpec) -> Option<&'a Template>;

    /// How often the owning reconciliation loop should re-invoke generation
    /// absent a triggering event.
    fn requeue_after(&self, spec: &GeneratorSpec) -> RequeueAfter;
}

/// Capability handle for variants that query a live cluster. The list
/// generator never dereferences it.
pub trait ClusterAccess: Send + Sync {}

/// Dispatch a spec to the shared instance of the variant it configures.
pub fn generator_for(spec: &GeneratorSpec) -> Option<&'static dyn Generator> {
    static LIST: ListGenerator = ListGenerator;

    if spec.list.is_some() {
        return Some(&LIST);
    }

    None
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequeueAfter {
    /// The generator's inputs are static; only a spec edit should trigger
    /// regeneration, never a timer.
    Never,
    After(Duration),
}

#[derive(Debug)]
pub enum GenerateError {
    /// The generator spec or its variant sub-configuration is absent.
    MissingConfiguration,
    /// An input document could not be parsed into structured data.
    Decode {
        what: &'static str,
        source: anyhow::Error,
    },
    /// Legacy dialect: a value had the wrong shape for its key.
    TypeMismatch {
        key: String,
        expected: &'static str,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfiguration => write!(f, "generator has no configuration"),
            Self::Decode { what, source } => write!(f, "decoding {what}: {source}"),
            Self::TypeMismatch { key, expected } => {
                write!(f, "expected {expected} for key `{key}`")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

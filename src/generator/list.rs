
use crate::manifest::{GeneratorSpec, ParamSet, Template};
use crate::params::{self, ParamMap};

use super::{ClusterAccess, GenerateError, Generator, RequeueAfter};

/// Expands an inline list of elements into parameter records. Stateless; the
/// shared instance in [`super::generator_for`] serves every call.
pub struct ListGenerator;

#[async_trait::async_trait]
impl Generator for ListGenerator {
    #[tracing::instrument(skip_all, fields(param_set = %param_set.metadata.name))]
    async fn generate_params(
        &self,
        spec: &GeneratorSpec,
        param_set: &ParamSet,
        _cluster: Option<&dyn ClusterAccess>,
    ) -> Result<Vec<ParamMap>, GenerateError> {
        let list = spec.list.as_ref().ok_or(GenerateError::MissingConfiguration)?;

        let mut res = Vec::with_capacity(list.elements.len());

        for element in &list.elements {
            let element = element.decode().map_err(|err| GenerateError::Decode {
                what: "list element",
                source: err.into(),
            })?;

            if param_set.spec.go_template {
                // Nested structure, including any `values` sub-mapping, is
                // preserved verbatim.
                res.push(element);
            } else {
                res.push(params::flatten(&element)?);
            }
        }

        if !list.elements_yaml.is_empty() {
            let yaml_elements: Vec<ParamMap> = serde_yaml::from_str(&list.elements_yaml)
                .map_err(|err| GenerateError::Decode {
                    what: "elementsYaml",
                    source: err.into(),
                })?;
            // Appended as decoded, never flattened, in either dialect.
            res.extend(yaml_elements);
        }

        Ok(res)
    }

    fn template<'a>(&self, spec: &'a GeneratorSpec) -> Option<&'a Template> {
        spec.list.as_ref().map(|list| &list.template)
    }

    fn requeue_after(&self, _spec: &GeneratorSpec) -> RequeueAfter {
        // Everything the list generator reads is embedded in the spec, so
        // there is nothing to poll.
        RequeueAfter::Never
    }
}

use serde_json::Value;

use crate::generator::GenerateError;

/// One parameter record: the key-value mapping the template renderer
/// substitutes into a manifest template. Insertion order is preserved.
pub type ParamMap = serde_json::Map<String, Value>;

/// Flatten a decoded element into the legacy flat record: every value must
/// be a string scalar, except the reserved `values` mapping whose entries
/// become dotted `values.<key>` entries.
pub fn flatten(element: &ParamMap) -> Result<ParamMap, GenerateError> {
    let mut params = ParamMap::new();

    for (key, value) in element {
        if key == "values" {
            let values = match value {
                Value::Object(values) => values,
                _ => {
                    return Err(GenerateError::TypeMismatch {
                        key: key.clone(),
                        expected: "a mapping",
                    });
                }
            };

            for (k, v) in values {
                let v = as_string(k, v)?;
                params.insert(format!("values.{k}"), Value::String(v));
            }
        } else {
            let v = as_string(key, value)?;
            params.insert(key.clone(), Value::String(v));
        }
    }

    Ok(params)
}

fn as_string(key: &str, value: &Value) -> Result<String, GenerateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(GenerateError::TypeMismatch {
            key: key.to_owned(),
            expected: "a string",
        }),
    }
}

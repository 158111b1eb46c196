//! Step definition model.
//!
//! Mirrors the subset of the Bitrise `step.yml` schema the generator needs.
//! Unknown fields are ignored so full step definitions parse unchanged.

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

/// Key holding the input's options inside an input mapping.
pub const OPTIONS_KEY: &str = "opts";

/// A parsed `step.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StepModel {
    /// Human-readable step name, used in log output only.
    pub title: Option<String>,

    /// Inputs in declaration order. `inputs:` with no value is an empty list.
    #[serde(deserialize_with = "null_as_empty")]
    pub inputs: Vec<EnvironmentItem>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<EnvironmentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EnvironmentItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One input entry: a single `KEY: default` pair plus an optional `opts` map.
///
/// ```yaml
/// - ssh_rsa_private_key: $SSH_RSA_PRIVATE_KEY
///   opts:
///     title: SSH private key
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentItem(Mapping);

impl EnvironmentItem {
    /// Extract the environment key and its default value.
    ///
    /// Rules:
    /// - the mapping must have one or two entries
    /// - exactly one entry must be a non-`opts` key
    /// - with two entries, the other must be `opts`
    /// - the default must be a scalar; `null` becomes an empty string
    pub fn key_value_pair(&self) -> Result<(String, String), String> {
        let keys = self.keys()?;

        if keys.is_empty() {
            return Err("no environment key specified".to_string());
        }
        if keys.len() > 2 {
            return Err(format!("more than 2 keys specified: {}", sorted_list(&keys)));
        }

        let mut env_key: Option<&str> = None;
        let mut options_found = false;
        for key in &keys {
            if *key == OPTIONS_KEY {
                options_found = true;
            } else {
                env_key = Some(*key);
            }
        }

        let key = match env_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(format!(
                    "no environment key found, keys: {}",
                    sorted_list(&keys)
                ));
            }
        };
        if keys.len() > 1 && !options_found {
            return Err(format!(
                "more than 1 environment key specified: {}",
                sorted_list(&keys)
            ));
        }

        let value = match self.0.get(key) {
            Some(value) => scalar_to_string(value)
                .ok_or_else(|| format!("value ({:?}) is not a string for key ({})", value, key))?,
            None => String::new(),
        };

        Ok((key.to_string(), value))
    }

    fn keys(&self) -> Result<Vec<&str>, String> {
        self.0
            .keys()
            .map(|k| {
                k.as_str()
                    .ok_or_else(|| format!("environment key must be a string, found {:?}", k))
            })
            .collect()
    }
}

fn sorted_list(keys: &[&str]) -> String {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    format!("[{}]", keys.join(" "))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

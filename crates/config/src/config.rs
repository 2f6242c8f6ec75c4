use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable overriding [`LabelsConfig::expand_args`].
pub const ENV_EXPAND_ARGS: &str = "GRAPHQL_ERD_EXPAND_ARGS";
/// Environment variable overriding [`LabelsConfig::expand_arg_types`].
pub const ENV_EXPAND_ARG_TYPES: &str = "GRAPHQL_ERD_EXPAND_ARG_TYPES";
/// Environment variable overriding [`RenderConfig::graphviz`].
pub const ENV_GRAPHVIZ: &str = "GRAPHQL_ERD_GRAPHVIZ";

/// Top-level graphql-erd configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErdConfig {
    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub introspection: IntrospectionConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// How relational field labels are written on edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LabelsConfig {
    /// List argument names instead of `...` (default: false)
    #[serde(default)]
    pub expand_args: bool,

    /// Show argument types when arguments are listed (default: false)
    #[serde(default)]
    pub expand_arg_types: bool,
}

/// Settings for introspecting a remote endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IntrospectionConfig {
    /// HTTP headers to include in the introspection request (e.g., for authentication)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Request timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Number of retry attempts on failure (default: 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
}

/// Diagram output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    /// Graphviz program used to produce the SVG (default: `dot` on `PATH`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphviz: Option<String>,

    /// Rank direction: LR, TB, RL or BT (default: LR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_dir: Option<String>,
}

impl ErdConfig {
    /// Applies the process environment on top of this configuration.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_EXPAND_ARGS) {
            self.labels.expand_args = parse_flag(ENV_EXPAND_ARGS, &value)?;
        }
        if let Some(value) = lookup(ENV_EXPAND_ARG_TYPES) {
            self.labels.expand_arg_types = parse_flag(ENV_EXPAND_ARG_TYPES, &value)?;
        }
        if let Some(value) = lookup(ENV_GRAPHVIZ).filter(|v| !v.trim().is_empty()) {
            self.render.graphviz = Some(value);
        }
        tracing::debug!(labels = ?self.labels, "Applied environment overrides");
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ErdConfig::default();
        assert!(!config.labels.expand_args);
        assert!(!config.labels.expand_arg_types);
        assert!(config.introspection.headers.is_empty());
        assert_eq!(config.render.graphviz, None);
    }

    #[test]
    fn test_env_overrides_flags() {
        let mut config = ErdConfig::default();
        config
            .apply_env_with(env(&[
                (ENV_EXPAND_ARGS, "true"),
                (ENV_EXPAND_ARG_TYPES, "1"),
                (ENV_GRAPHVIZ, "/opt/graphviz/bin/dot"),
            ]))
            .unwrap();

        assert!(config.labels.expand_args);
        assert!(config.labels.expand_arg_types);
        assert_eq!(
            config.render.graphviz.as_deref(),
            Some("/opt/graphviz/bin/dot")
        );
    }

    #[test]
    fn test_env_can_turn_flags_off() {
        let mut config = ErdConfig {
            labels: LabelsConfig {
                expand_args: true,
                expand_arg_types: true,
            },
            ..ErdConfig::default()
        };
        config
            .apply_env_with(env(&[(ENV_EXPAND_ARGS, "no")]))
            .unwrap();

        assert!(!config.labels.expand_args);
        assert!(config.labels.expand_arg_types);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = ErdConfig::default();
        let err = config
            .apply_env_with(env(&[(ENV_EXPAND_ARGS, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_EXPAND_ARGS));
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let config: ErdConfig = serde_json::from_str(
            r#"{
                "labels": { "expandArgs": true },
                "introspection": { "headers": { "Authorization": "Bearer t" }, "retry": 2 },
                "render": { "rankDir": "TB" }
            }"#,
        )
        .unwrap();

        assert!(config.labels.expand_args);
        assert!(!config.labels.expand_arg_types);
        assert_eq!(config.introspection.retry, Some(2));
        assert_eq!(config.introspection.timeout, None);
        assert_eq!(config.render.rank_dir.as_deref(), Some("TB"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = serde_json::from_str::<ErdConfig>(r#"{ "labels": { "expand": true } }"#);
        assert!(result.is_err());
    }
}

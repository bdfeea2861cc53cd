//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: ParametersDef,
    pub grid: GridDef,
    #[serde(default = "default_critical_do")]
    pub critical_do_mg_l: f64,
    #[serde(default)]
    pub degenerate_rates: DegeneracyDef,
}

/// Reach parameters, in the units named by each key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    pub saturation_do_mg_l: f64,
    pub initial_do_mg_l: f64,
    pub initial_bod_mg_l: f64,
    pub decay_rate_per_h: f64,
    pub reaeration_rate_per_h: f64,
    pub velocity_km_h: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    #[serde(default)]
    pub start_km: f64,
    pub stop_km: f64,
    pub step_km: f64,
    /// Absent means exclusive for current files; v0 files are migrated to inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndpointDef {
    #[default]
    Exclusive,
    Inclusive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DegeneracyDef {
    #[default]
    Reject,
    LimitingCase {
        #[serde(default = "default_limit_tolerance")]
        tolerance: f64,
    },
}

fn default_critical_do() -> f64 {
    5.0
}

fn default_limit_tolerance() -> f64 {
    1e-9
}

impl Scenario {
    /// The reference reach and 0-50 km grid.
    pub fn reference() -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: "Reference reach".to_string(),
            description: None,
            parameters: ParametersDef {
                saturation_do_mg_l: 9.0,
                initial_do_mg_l: 7.0,
                initial_bod_mg_l: 20.0,
                decay_rate_per_h: 0.2,
                reaeration_rate_per_h: 0.3,
                velocity_km_h: 2.0,
            },
            grid: GridDef {
                start_km: 0.0,
                stop_km: 50.0,
                step_km: 0.2,
                endpoint: Some(EndpointDef::Exclusive),
            },
            critical_do_mg_l: default_critical_do(),
            degenerate_rates: DegeneracyDef::Reject,
        }
    }
}

impl GridDef {
    pub fn endpoint_or_default(&self) -> EndpointDef {
        self.endpoint.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_uses_defaults() {
        let yaml = r#"
version: 1
name: Minimal
parameters:
  saturation_do_mg_l: 9.0
  initial_do_mg_l: 7.0
  initial_bod_mg_l: 20.0
  decay_rate_per_h: 0.2
  reaeration_rate_per_h: 0.3
  velocity_km_h: 2.0
grid:
  stop_km: 50.0
  step_km: 0.2
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.grid.start_km, 0.0);
        assert_eq!(scenario.grid.endpoint, None);
        assert_eq!(scenario.grid.endpoint_or_default(), EndpointDef::Exclusive);
        assert_eq!(scenario.critical_do_mg_l, 5.0);
        assert_eq!(scenario.degenerate_rates, DegeneracyDef::Reject);
        assert!(scenario.description.is_none());
    }

    #[test]
    fn degeneracy_policy_tagging() {
        let reject: DegeneracyDef = serde_yaml::from_str("policy: reject").unwrap();
        assert_eq!(reject, DegeneracyDef::Reject);

        let limit: DegeneracyDef = serde_yaml::from_str("policy: limiting_case").unwrap();
        assert_eq!(limit, DegeneracyDef::LimitingCase { tolerance: 1e-9 });

        let explicit: DegeneracyDef =
            serde_yaml::from_str("policy: limiting_case\ntolerance: 0.001").unwrap();
        assert_eq!(explicit, DegeneracyDef::LimitingCase { tolerance: 0.001 });
    }

    #[test]
    fn endpoint_is_snake_case() {
        let json = serde_json::to_string(&EndpointDef::Inclusive).unwrap();
        assert_eq!(json, "\"inclusive\"");
    }
}

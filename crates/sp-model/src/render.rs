//! Data handed to an external chart renderer.
//!
//! The renderer is not part of this workspace. It receives three aligned
//! series over a shared distance axis, plus axis labels.

use crate::error::ModelResult;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use sp_core::Real;

pub const DISTANCE_AXIS_LABEL: &str = "Distance (km)";
pub const CONCENTRATION_AXIS_LABEL: &str = "Dissolved Oxygen (mg/L)";

pub const BOD_SERIES: &str = "BOD";
pub const DO_SERIES: &str = "DO";
pub const THRESHOLD_SERIES: &str = "Critical DO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<Real>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub distance_km: Vec<Real>,
    pub series: Vec<NamedSeries>,
}

impl RenderPayload {
    pub fn from_profile(title: impl Into<String>, profile: &Profile) -> ModelResult<Self> {
        profile.check_aligned()?;
        Ok(Self {
            title: title.into(),
            x_label: DISTANCE_AXIS_LABEL.to_string(),
            y_label: CONCENTRATION_AXIS_LABEL.to_string(),
            distance_km: profile.distance_km.clone(),
            series: vec![
                NamedSeries {
                    name: BOD_SERIES.to_string(),
                    values: profile.bod_mg_l.clone(),
                },
                NamedSeries {
                    name: DO_SERIES.to_string(),
                    values: profile.do_mg_l.clone(),
                },
                NamedSeries {
                    name: THRESHOLD_SERIES.to_string(),
                    values: profile.threshold_mg_l.clone(),
                },
            ],
        })
    }

    pub fn series(&self, name: &str) -> Option<&NamedSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn is_aligned(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.values.len() == self.distance_km.len())
    }
}

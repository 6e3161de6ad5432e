// SPDX-License-Identifier: MPL-2.0
//! Remote tree building.
//!
//! The client posts the raw parameter names and training data as JSON and
//! receives a base64 PNG of the tree, the server's build log and optional
//! tree metrics.
//!
//! Every failure is a [`BuildError`]: a non-success status or an `error`
//! field is [`BuildError::Remote`], anything that prevents reading the
//! answer is [`BuildError::Transport`].

mod client;
mod image;

pub use client::BuildClient;
pub use image::TreeImage;

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message used when the server fails without explaining why.
const GENERIC_FAILURE: &str = "Failed to build tree";

/// Body of a build request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    /// Comma-separated parameter names, the last one being the target.
    pub parameters: String,
    /// Newline-separated rows of comma-separated values.
    pub data: String,
}

/// Tree statistics reported by the server.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TreeMetrics {
    pub created_at: Option<String>,
    pub features: Vec<String>,
    pub target: Option<String>,
    pub node_count: u32,
    pub max_depth: u32,
    pub leaf_count: u32,
    pub split_counts: BTreeMap<String, u32>,
    pub feature_importance: BTreeMap<String, f64>,
    /// Seconds spent building the tree on the server.
    pub build_time: f64,
}

impl TreeMetrics {
    /// One-line description, e.g.
    /// `Tree metrics: 9 nodes, 5 leaves, depth 2, built in 0.004 s`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Tree metrics: {} nodes, {} leaves, depth {}, built in {:.3} s",
            self.node_count, self.leaf_count, self.max_depth, self.build_time
        )
    }

    /// Features sorted by decreasing importance. Ties keep name order.
    #[must_use]
    pub fn ranked_features(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .feature_importance
            .iter()
            .map(|(name, importance)| (name.as_str(), *importance))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Raw JSON answer of the build endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub visualization: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub metrics: Option<TreeMetrics>,
}

/// A successful build, ready to install.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub image: TreeImage,
    pub logs: Vec<String>,
    pub metrics: Option<TreeMetrics>,
}

impl BuildResponse {
    /// Interprets the response given the HTTP status it arrived with.
    pub fn into_outcome(self, status: u16) -> Result<BuildOutcome, BuildError> {
        if let Some(error) = self.error {
            return Err(BuildError::Remote(error));
        }
        if !(200..300).contains(&status) || self.success == Some(false) {
            return Err(BuildError::Remote(GENERIC_FAILURE.to_string()));
        }

        let encoded = self.visualization.ok_or_else(|| {
            BuildError::Transport("invalid response: missing visualization".to_string())
        })?;
        let image = TreeImage::from_base64(&encoded)?;

        Ok(BuildOutcome {
            image,
            logs: self.logs,
            metrics: self.metrics,
        })
    }
}

/// Parses a raw response body.
///
/// A body that is not JSON is a transport failure on success statuses and a
/// generic remote failure otherwise.
pub fn parse_response(status: u16, body: &[u8]) -> Result<BuildOutcome, BuildError> {
    match serde_json::from_slice::<BuildResponse>(body) {
        Ok(response) => response.into_outcome(status),
        Err(_) if !(200..300).contains(&status) => Err(BuildError::Remote(format!(
            "{GENERIC_FAILURE} (HTTP {status})"
        ))),
        Err(err) => Err(err.into()),
    }
}

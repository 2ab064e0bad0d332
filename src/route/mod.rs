// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Remote path adapter.
//!
//! Converts the route service's path response into route-colored segments. The
//! adapter never touches the scene store; it only returns data for the panel to
//! append. The one remote-specific failure (unrecognized place identifiers) is
//! kept distinct from every transport-level failure.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::model::{PlaceId, Point, Segment};

/// Fixed color for fetched route segments, distinct from user-drawn colors by
/// convention only.
pub const ROUTE_COLOR: &str = "blue";

/// Explicit per-request timeout; a non-responding service surfaces as
/// [`RouteError::Unavailable`] instead of pending forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WirePoint {
    pub x: f64,
    pub y: f64,
}

/// One step of a returned path. Extra fields (per-step cost and the like) are
/// ignored on purpose; only the geometry matters here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PathStep {
    pub start: WirePoint,
    pub end: WirePoint,
}

#[derive(Debug, Clone, Deserialize)]
struct PathResponse {
    #[serde(default)]
    path: Vec<PathStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    UnknownEndpoint { start: PlaceId, end: PlaceId },
    Unavailable { reason: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEndpoint { start, end } => write!(
                f,
                "no place is known by the short name '{start}' or '{end}'"
            ),
            Self::Unavailable { reason } => write!(f, "route service unavailable: {reason}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl RouteError {
    fn from_transport(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "request timed out".to_owned()
        } else {
            err.to_string()
        };
        Self::Unavailable { reason }
    }
}

/// HTTP client for the walkway route service.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RouteError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RouteError::Unavailable {
                reason: format!("failed to build http client: {err}"),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests the path between two places and converts it into route-colored
    /// segments, in step order. A recognized pair with an empty path is a
    /// successful empty batch.
    pub async fn find_path(
        &self,
        start: &PlaceId,
        end: &PlaceId,
    ) -> Result<Vec<Segment>, RouteError> {
        let url = format!("{}/findPath", self.base_url);
        tracing::debug!(%start, %end, %url, "requesting path");

        let response = self
            .http
            .get(&url)
            .query(&[("start", start.as_str()), ("end", end.as_str())])
            .send()
            .await
            .map_err(RouteError::from_transport)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND {
            return Err(RouteError::UnknownEndpoint {
                start: start.clone(),
                end: end.clone(),
            });
        }
        if !status.is_success() {
            return Err(RouteError::Unavailable {
                reason: format!("unexpected status {status}"),
            });
        }

        let body: PathResponse = response.json().await.map_err(RouteError::from_transport)?;
        tracing::debug!(steps = body.path.len(), "path response received");
        Ok(segments_from_steps(&body.path))
    }

    /// Fetches the service's place directory (short name to long name).
    pub async fn buildings(&self) -> Result<BTreeMap<String, String>, RouteError> {
        let url = format!("{}/buildings", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(RouteError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Unavailable {
                reason: format!("unexpected status {status}"),
            });
        }

        response.json().await.map_err(RouteError::from_transport)
    }
}

/// Pure conversion from wire steps to segments; every segment carries the fixed
/// route color.
pub fn segments_from_steps(steps: &[PathStep]) -> Vec<Segment> {
    steps
        .iter()
        .map(|step| {
            Segment::new(
                Point::new(step.start.x, step.start.y),
                Point::new(step.end.x, step.end.y),
                ROUTE_COLOR,
            )
        })
        .collect()
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The bundled walkway route service.
//!
//! A small HTTP surface over a [`CampusMap`]: `GET /findPath?start=S&end=E`
//! answers with the shortest path as ordered steps, `GET /buildings` with the
//! place directory. Unknown or missing inputs are 400s with a plain-text body
//! naming the offending input, which the remote path adapter maps to its
//! unknown-endpoint condition.

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::campus::{CampusError, CampusMap, FoundPath};
use crate::model::Point;

#[derive(Debug, Clone, Copy, Serialize)]
struct WirePoint {
    x: f64,
    y: f64,
}

impl From<Point> for WirePoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct WireStep {
    start: WirePoint,
    end: WirePoint,
    cost: f64,
}

#[derive(Debug, Serialize)]
struct WirePath {
    start: WirePoint,
    cost: f64,
    path: Vec<WireStep>,
}

impl From<FoundPath> for WirePath {
    fn from(found: FoundPath) -> Self {
        Self {
            start: found.start.into(),
            cost: found.cost,
            path: found
                .steps
                .into_iter()
                .map(|step| WireStep {
                    start: step.start.into(),
                    end: step.end.into(),
                    cost: step.cost,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FindPathParams {
    start: Option<String>,
    end: Option<String>,
}

pub fn router(map: Arc<CampusMap>) -> Router {
    Router::new()
        .route("/findPath", get(find_path))
        .route("/buildings", get(buildings))
        .with_state(map)
}

/// Serves the router until the shutdown future resolves.
pub async fn serve(
    listener: tokio::net::TcpListener,
    map: Arc<CampusMap>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    axum::serve(listener, router(map))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn find_path(
    State(map): State<Arc<CampusMap>>,
    Query(params): Query<FindPathParams>,
) -> Response {
    let Some(start) = params.start.filter(|value| !value.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing query parameter 'start'").into_response();
    };
    let Some(end) = params.end.filter(|value| !value.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing query parameter 'end'").into_response();
    };

    match map.shortest_path(start.trim(), end.trim()) {
        Ok(found) => {
            tracing::info!(%start, %end, steps = found.steps.len(), "served path");
            Json(WirePath::from(found)).into_response()
        }
        Err(err @ (CampusError::UnknownPlace { .. } | CampusError::NoRoute { .. })) => {
            tracing::info!(%start, %end, %err, "rejected path request");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err) => {
            tracing::error!(%err, "unexpected map failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn buildings(State(map): State<Arc<CampusMap>>) -> Response {
    Json(map.building_names()).into_response()
}

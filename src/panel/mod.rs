// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The input panel as a pure reducer.
//!
//! Every user action is reduced over an immutable state value, producing a
//! replacement state plus ordered effects for the shell to execute. Scene
//! mutation happens only through effects, which keeps the single-writer
//! invariant reviewable in one place.
//!
//! Overlapping route draws are resolved with request tickets: each draw arms a
//! fresh ticket, a newer draw supersedes the old one, and a resolution carrying
//! anything but the armed ticket is discarded wholesale.

use crate::model::{PlaceId, Segment};
use crate::parse::parse_edge_list;
use crate::route::RouteError;

/// Identity of one in-flight route request.
pub type RequestTicket = u64;

/// Where segments originate: a free-text edge list or a start/end place pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    EdgeText,
    Route,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    mode: PanelMode,
    edge_text: String,
    route_start: String,
    route_end: String,
    notice: Option<String>,
    next_ticket: RequestTicket,
    inflight: Option<RequestTicket>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            mode: PanelMode::EdgeText,
            edge_text: String::new(),
            route_start: String::new(),
            route_end: String::new(),
            notice: None,
            next_ticket: 1,
            inflight: None,
        }
    }
}

impl PanelState {
    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn edge_text(&self) -> &str {
        &self.edge_text
    }

    pub fn route_start(&self) -> &str {
        &self.route_start
    }

    pub fn route_end(&self) -> &str {
        &self.route_end
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn inflight(&self) -> Option<RequestTicket> {
        self.inflight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    SetMode(PanelMode),
    EditEdgeText(String),
    EditRouteStart(String),
    EditRouteEnd(String),
    Draw,
    ClearBoard,
    ClearInput,
    DismissNotice,
    RouteResolved {
        ticket: RequestTicket,
        outcome: Result<Vec<Segment>, RouteError>,
    },
}

/// Side effects the shell executes after a transition, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    AppendScene(Vec<Segment>),
    ResetScene,
    FetchRoute {
        ticket: RequestTicket,
        start: PlaceId,
        end: PlaceId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PanelState,
    pub effects: Vec<PanelEffect>,
}

impl Transition {
    fn state_only(state: PanelState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

pub fn reduce(state: &PanelState, action: PanelAction) -> Transition {
    let mut next = state.clone();

    match action {
        PanelAction::SetMode(mode) => {
            next.mode = mode;
            Transition::state_only(next)
        }
        PanelAction::EditEdgeText(text) => {
            next.edge_text = text;
            Transition::state_only(next)
        }
        PanelAction::EditRouteStart(text) => {
            next.route_start = text;
            Transition::state_only(next)
        }
        PanelAction::EditRouteEnd(text) => {
            next.route_end = text;
            Transition::state_only(next)
        }
        PanelAction::Draw => match state.mode {
            PanelMode::EdgeText => draw_edge_text(next),
            PanelMode::Route => draw_route(next),
        },
        PanelAction::ClearBoard => Transition {
            state: next,
            effects: vec![PanelEffect::ResetScene],
        },
        PanelAction::ClearInput => {
            match next.mode {
                PanelMode::EdgeText => next.edge_text.clear(),
                PanelMode::Route => {
                    next.route_start.clear();
                    next.route_end.clear();
                }
            }
            Transition::state_only(next)
        }
        PanelAction::DismissNotice => {
            next.notice = None;
            Transition::state_only(next)
        }
        PanelAction::RouteResolved { ticket, outcome } => route_resolved(next, ticket, outcome),
    }
}

fn draw_edge_text(mut next: PanelState) -> Transition {
    match parse_edge_list(&next.edge_text) {
        Ok(batch) => {
            next.notice = None;
            Transition {
                state: next,
                effects: vec![PanelEffect::AppendScene(batch)],
            }
        }
        Err(err) => {
            next.notice = Some(err.to_string());
            Transition::state_only(next)
        }
    }
}

fn draw_route(mut next: PanelState) -> Transition {
    let start = match PlaceId::new(next.route_start.trim()) {
        Ok(start) => start,
        Err(err) => {
            next.notice = Some(format!("start place: {err}"));
            return Transition::state_only(next);
        }
    };
    let end = match PlaceId::new(next.route_end.trim()) {
        Ok(end) => end,
        Err(err) => {
            next.notice = Some(format!("end place: {err}"));
            return Transition::state_only(next);
        }
    };

    let ticket = next.next_ticket;
    next.next_ticket += 1;
    next.inflight = Some(ticket);
    Transition {
        state: next,
        effects: vec![PanelEffect::FetchRoute { ticket, start, end }],
    }
}

fn route_resolved(
    mut next: PanelState,
    ticket: RequestTicket,
    outcome: Result<Vec<Segment>, RouteError>,
) -> Transition {
    if next.inflight != Some(ticket) {
        // Superseded by a newer draw: dropped without a notice.
        return Transition::state_only(next);
    }

    next.inflight = None;
    match outcome {
        Ok(batch) => {
            next.notice = None;
            Transition {
                state: next,
                effects: vec![PanelEffect::AppendScene(batch)],
            }
        }
        Err(err) => {
            next.notice = Some(err.to_string());
            Transition::state_only(next)
        }
    }
}

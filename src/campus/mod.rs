// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The walkway map behind the bundled route service.
//!
//! Places are named locations; walkways are bidirectional weighted steps between
//! points on the board plane. Points are interned to indices once at build time
//! so the shortest-path search runs over a plain adjacency list.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use crate::model::Point;

mod dijkstra;

/// A named location on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    short_name: SmolStr,
    long_name: String,
    location: Point,
}

impl Place {
    pub fn new(short_name: impl Into<SmolStr>, long_name: impl Into<String>, location: Point) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: long_name.into(),
            location,
        }
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn location(&self) -> Point {
        self.location
    }
}

/// One bidirectional walkway step between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walkway {
    pub start: Point,
    pub end: Point,
    pub distance: f64,
}

impl Walkway {
    /// Walkway with the euclidean distance as its weight.
    pub fn between(start: Point, end: Point) -> Self {
        let distance = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
        Self {
            start,
            end,
            distance,
        }
    }
}

/// One step of a found path, in walk order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    pub start: Point,
    pub end: Point,
    pub cost: f64,
}

/// A found shortest path: the walked steps plus the total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    pub start: Point,
    pub cost: f64,
    pub steps: Vec<WalkStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CampusError {
    UnknownPlace {
        short_name: String,
    },
    NoRoute {
        start: String,
        end: String,
    },
    MalformedTable {
        table: TableKind,
        line_no: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Places,
    Walkways,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Places => f.write_str("places"),
            Self::Walkways => f.write_str("walkways"),
        }
    }
}

impl fmt::Display for CampusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlace { short_name } => {
                write!(f, "no place is known by the short name '{short_name}'")
            }
            Self::NoRoute { start, end } => {
                write!(f, "the walkway map does not connect '{start}' and '{end}'")
            }
            Self::MalformedTable {
                table,
                line_no,
                reason,
            } => write!(f, "malformed {table} table on line {line_no}: {reason}"),
        }
    }
}

impl std::error::Error for CampusError {}

/// Exact-bit point key; map points come from parsed literals, so walkway
/// endpoints that should join always carry identical bits.
type PointKey = (u64, u64);

fn point_key(point: Point) -> PointKey {
    (point.x.to_bits(), point.y.to_bits())
}

#[derive(Debug, Clone)]
pub struct CampusMap {
    places: Vec<Place>,
    nodes: Vec<Point>,
    node_index: BTreeMap<PointKey, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl CampusMap {
    pub fn new(places: Vec<Place>, walkways: &[Walkway]) -> Self {
        let mut map = Self {
            places,
            nodes: Vec::new(),
            node_index: BTreeMap::new(),
            adjacency: Vec::new(),
        };

        // Every place is a node even when no walkway reaches it; routing to it
        // then reports NoRoute instead of UnknownPlace.
        let place_points: Vec<Point> = map.places.iter().map(Place::location).collect();
        for point in place_points {
            map.intern(point);
        }
        for walkway in walkways {
            let a = map.intern(walkway.start);
            let b = map.intern(walkway.end);
            map.adjacency[a].push((b, walkway.distance));
            map.adjacency[b].push((a, walkway.distance));
        }

        map
    }

    fn intern(&mut self, point: Point) -> usize {
        let key = point_key(point);
        if let Some(&index) = self.node_index.get(&key) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(point);
        self.node_index.insert(key, index);
        self.adjacency.push(Vec::new());
        index
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.find_place(short_name).is_some()
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Option<&str> {
        self.find_place(short_name).map(Place::long_name)
    }

    /// Ordered short-name to long-name directory.
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.places
            .iter()
            .map(|place| (place.short_name().to_owned(), place.long_name().to_owned()))
            .collect()
    }

    fn find_place(&self, short_name: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.short_name() == short_name)
    }

    /// Shortest walkway path between two places, by short name.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<FoundPath, CampusError> {
        let start_place = self.find_place(start).ok_or_else(|| CampusError::UnknownPlace {
            short_name: start.to_owned(),
        })?;
        let end_place = self.find_place(end).ok_or_else(|| CampusError::UnknownPlace {
            short_name: end.to_owned(),
        })?;

        let no_route = || CampusError::NoRoute {
            start: start.to_owned(),
            end: end.to_owned(),
        };
        let start_node = *self
            .node_index
            .get(&point_key(start_place.location()))
            .ok_or_else(no_route)?;
        let end_node = *self
            .node_index
            .get(&point_key(end_place.location()))
            .ok_or_else(no_route)?;

        let (cost, node_path) =
            dijkstra::shortest_path(&self.adjacency, start_node, end_node).ok_or_else(no_route)?;

        let steps = node_path
            .windows(2)
            .map(|pair| WalkStep {
                start: self.nodes[pair[0]],
                end: self.nodes[pair[1]],
                cost: self.edge_cost(pair[0], pair[1]),
            })
            .collect();

        Ok(FoundPath {
            start: start_place.location(),
            cost,
            steps,
        })
    }

    fn edge_cost(&self, a: usize, b: usize) -> f64 {
        self.adjacency[a]
            .iter()
            .filter(|(node, _)| *node == b)
            .map(|(_, weight)| *weight)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Builds a map from two tab-separated tables.
///
/// Places: `short<TAB>long<TAB>x<TAB>y`. Walkways: `x1<TAB>y1<TAB>x2<TAB>y2<TAB>distance`.
/// Blank lines and `#` comment lines are skipped.
pub fn campus_from_tables(places_tsv: &str, walkways_tsv: &str) -> Result<CampusMap, CampusError> {
    let mut places = Vec::new();
    for (line_no, line) in table_lines(places_tsv) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [short, long, x, y] = fields.as_slice() else {
            return Err(malformed(TableKind::Places, line_no, "expected 4 tab-separated fields"));
        };
        let x = parse_table_number(TableKind::Places, line_no, x)?;
        let y = parse_table_number(TableKind::Places, line_no, y)?;
        places.push(Place::new(short.trim(), long.trim(), Point::new(x, y)));
    }

    let mut walkways = Vec::new();
    for (line_no, line) in table_lines(walkways_tsv) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [x1, y1, x2, y2, distance] = fields.as_slice() else {
            return Err(malformed(TableKind::Walkways, line_no, "expected 5 tab-separated fields"));
        };
        let x1 = parse_table_number(TableKind::Walkways, line_no, x1)?;
        let y1 = parse_table_number(TableKind::Walkways, line_no, y1)?;
        let x2 = parse_table_number(TableKind::Walkways, line_no, x2)?;
        let y2 = parse_table_number(TableKind::Walkways, line_no, y2)?;
        let distance = parse_table_number(TableKind::Walkways, line_no, distance)?;
        walkways.push(Walkway {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            distance,
        });
    }

    Ok(CampusMap::new(places, &walkways))
}

fn table_lines(table: &str) -> impl Iterator<Item = (usize, &str)> {
    table
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn malformed(table: TableKind, line_no: usize, reason: impl Into<String>) -> CampusError {
    CampusError::MalformedTable {
        table,
        line_no,
        reason: reason.into(),
    }
}

fn parse_table_number(table: TableKind, line_no: usize, token: &str) -> Result<f64, CampusError> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| malformed(table, line_no, format!("not a number: {token:?}")))?;
    if !value.is_finite() {
        return Err(malformed(table, line_no, format!("not a finite number: {token:?}")));
    }
    Ok(value)
}

/// Built-in demo map: a small quad of buildings joined by a walkway loop with
/// one diagonal shortcut. Coordinates sit well inside the board plane.
pub fn demo_campus() -> CampusMap {
    let kne = Point::new(1000.0, 1000.0);
    let cse = Point::new(3000.0, 1000.0);
    let hub = Point::new(3000.0, 3000.0);
    let suz = Point::new(1000.0, 3000.0);
    let mid = Point::new(2000.0, 2000.0);

    let places = vec![
        Place::new("KNE", "Kane Hall", kne),
        Place::new("CSE", "Computer Science Building", cse),
        Place::new("HUB", "Student Union Building", hub),
        Place::new("SUZ", "Suzzallo Library", suz),
    ];

    let walkways = [
        Walkway::between(kne, cse),
        Walkway::between(cse, hub),
        Walkway::between(hub, suz),
        Walkway::between(suz, kne),
        Walkway::between(kne, mid),
        Walkway::between(mid, hub),
    ];

    CampusMap::new(places, &walkways)
}

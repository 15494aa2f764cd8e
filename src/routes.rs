//! Route table and location matching.
//!
//! ARCHITECTURE
//! ============
//! The route table is an ordered list of `(Pattern, ViewKind)` entries.
//! `RouteTable::resolve` is a pure function from a browser location to the
//! view that should be displayed; `app::RouteView` re-runs it whenever the
//! router reports a location change.
//!
//! MATCHING
//! ========
//! Exact (all-static) patterns are tried before parameterized ones. Among
//! parameterized patterns the one with more static segments wins, and ties
//! keep declaration order. Static segments compare ASCII case-insensitively;
//! parameter values are percent-decoded and keep their case. There is no
//! catch-all: a location with no matching entry resolves to `None`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

/// Errors raised while declaring routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),
    #[error("route pattern has an unnamed parameter: {0}")]
    EmptyParamName(String),
    #[error("route pattern binds '{name}' more than once: {pattern}")]
    DuplicateParam { pattern: String, name: String },
    #[error("route pattern {new} overlaps existing pattern {existing}")]
    DuplicatePattern { existing: String, new: String },
}

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must appear in the location.
    Static(String),
    /// `:name` placeholder bound to whatever the location holds there.
    Param(String),
}

/// A parsed route pattern such as `/restaurants/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse pattern text. `/` parses to an empty segment list.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the text does not start with `/`, contains a
    /// bare `:`, or binds the same parameter name twice.
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        if !source.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(source.to_owned()));
        }

        let mut segments = Vec::new();
        for raw in source.split('/').filter(|s| !s.is_empty()) {
            let segment = match raw.strip_prefix(':') {
                Some("") => return Err(RouteError::EmptyParamName(source.to_owned())),
                Some(name) => {
                    let already_bound = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if already_bound {
                        return Err(RouteError::DuplicateParam {
                            pattern: source.to_owned(),
                            name: name.to_owned(),
                        });
                    }
                    Segment::Param(name.to_owned())
                }
                None => Segment::Static(raw.to_owned()),
            };
            segments.push(segment);
        }

        Ok(Self { source: source.to_owned(), segments })
    }

    /// Original pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern has no parameters.
    pub fn is_exact(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    fn static_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Static(_)))
            .count()
    }

    /// Two patterns overlap when they match exactly the same locations.
    fn same_shape(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|pair| match pair {
                (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                (Segment::Param(_), Segment::Param(_)) => true,
                _ => false,
            })
    }

    /// Match already-split location segments, binding parameters on success.
    pub fn match_path(&self, path: &[&str]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(actual) {
                        return None;
                    }
                }
                Segment::Param(name) => params.push(name, decode_segment(actual)),
            }
        }
        Some(params)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

/// Parameters bound by a successful match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    fn push(&mut self, name: &str, value: String) {
        self.0.push((name.to_owned(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Page-level views a route can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    RestaurantList,
    RestaurantDetail,
}

/// Result of resolving a location against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub params: Params,
    pub pattern: String,
}

#[derive(Debug, Clone)]
struct RouteEntry {
    pattern: Pattern,
    view: ViewKind,
}

/// Ordered route declarations.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the pattern is malformed or matches exactly
    /// the same locations as an earlier entry.
    pub fn route(mut self, pattern: &str, view: ViewKind) -> Result<Self, RouteError> {
        let pattern = Pattern::parse(pattern)?;
        if let Some(existing) = self.entries.iter().find(|e| e.pattern.same_shape(&pattern)) {
            return Err(RouteError::DuplicatePattern {
                existing: existing.pattern.source.clone(),
                new: pattern.source,
            });
        }
        self.entries.push(RouteEntry { pattern, view });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared patterns in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.entries.iter().map(|e| &e.pattern)
    }

    /// Select the single view for `location`, or `None` if nothing matches.
    ///
    /// `location` may carry a query string or fragment; both are ignored.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let path = split_location(location);

        let mut candidates: Vec<&RouteEntry> = self.entries.iter().collect();
        // Stable sort keeps declaration order among equally specific entries.
        candidates.sort_by_key(|e| (!e.pattern.is_exact(), std::cmp::Reverse(e.pattern.static_count())));

        let found = candidates.into_iter().find_map(|entry| {
            entry.pattern.match_path(&path).map(|params| RouteMatch {
                view: entry.view,
                params,
                pattern: entry.pattern.source.clone(),
            })
        });

        match &found {
            Some(m) => log::debug!("route {location} -> {} ({:?})", m.pattern, m.view),
            None => log::debug!("route {location} -> no match"),
        }
        found
    }
}

fn split_location(location: &str) -> Vec<&str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    location[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// The application's route declarations.
///
/// `/` and `/restaurants` both show the list; `/restaurants/:id` shows one
/// restaurant.
pub fn restaurant_routes() -> RouteTable {
    static_table().clone()
}

fn static_table() -> &'static RouteTable {
    static TABLE: std::sync::OnceLock<RouteTable> = std::sync::OnceLock::new();
    TABLE.get_or_init(|| {
        build_restaurant_routes().unwrap_or_else(|err| {
            log::error!("invalid route table: {err}");
            RouteTable::new()
        })
    })
}

fn build_restaurant_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new()
        .route("/restaurants", ViewKind::RestaurantList)?
        .route("/restaurants/:id", ViewKind::RestaurantDetail)?
        .route("/", ViewKind::RestaurantList)
}

/// Typed form of a match against [`restaurant_routes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    RestaurantList,
    RestaurantDetail { id: String },
}

impl AppRoute {
    /// Resolve `location` against the application's route table.
    pub fn resolve(location: &str) -> Option<Self> {
        static_table().resolve(location).and_then(Self::from_match)
    }

    /// Convert a raw match. A detail match without an `id` yields `None`.
    pub fn from_match(m: RouteMatch) -> Option<Self> {
        match m.view {
            ViewKind::RestaurantList => Some(Self::RestaurantList),
            ViewKind::RestaurantDetail => m
                .params
                .get("id")
                .map(|id| Self::RestaurantDetail { id: id.to_owned() }),
        }
    }

    /// Canonical link target for this route.
    pub fn href(&self) -> String {
        match self {
            Self::RestaurantList => "/restaurants".to_owned(),
            Self::RestaurantDetail { id } => {
                format!("/restaurants/{}", urlencoding::encode(id))
            }
        }
    }

    pub fn view(&self) -> ViewKind {
        match self {
            Self::RestaurantList => ViewKind::RestaurantList,
            Self::RestaurantDetail { .. } => ViewKind::RestaurantDetail,
        }
    }
}

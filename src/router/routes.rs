//! Route table and path matching.
//!
//! DESIGN
//! ======
//! The table mirrors the `<Routes>` declared in `app.rs` but is plain data so
//! the navigator can resolve paths and build redirect targets without a
//! mounted router. Records are matched in declaration order; the catch-all is
//! last.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;
use std::fmt;

/// Path parameters captured while matching, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// Named routes of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Login,
    Home,
    Profile,
    NotFound,
}

impl RouteName {
    pub const ALL: [RouteName; 4] = [Self::Login, Self::Home, Self::Profile, Self::NotFound];

    /// Public route name, as used in links and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Profile => "profile",
            Self::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("path must start with `/`: {0:?}")]
    InvalidPath(String),
    #[error("no route matches {0:?}")]
    NoMatch(String),
    #[error("route `{0}` is not in the table")]
    UnknownRoute(RouteName),
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: RouteName, param: String },
}

/// A path matched to a named route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    /// Normalized path that was matched.
    pub path: String,
    pub params: Params,
}

impl ResolvedRoute {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Result of resolving a path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Route(ResolvedRoute),
    /// A redirect record matched; navigation continues at this path.
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    /// Matches the remaining path, including nothing.
    CatchAll(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    View(RouteName),
    Redirect(String),
}

#[derive(Clone, Debug)]
struct RouteRecord {
    pattern: &'static str,
    segments: Vec<Segment>,
    target: Target,
}

/// Ordered set of route records.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/home";
pub const PROFILE_PATH: &str = "/users/:username/profile";
pub const NOT_FOUND_PATH: &str = "/404";
pub const CATCH_ALL_PATH: &str = "/:catchAll(.*)";

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's routes.
    pub fn standard() -> Self {
        Self::new()
            .route(LOGIN_PATH, RouteName::Login)
            .route(HOME_PATH, RouteName::Home)
            .route(PROFILE_PATH, RouteName::Profile)
            .route(NOT_FOUND_PATH, RouteName::NotFound)
            .redirect(CATCH_ALL_PATH, NOT_FOUND_PATH)
    }

    /// Append a record rendering `name` at `pattern`.
    #[must_use]
    pub fn route(mut self, pattern: &'static str, name: RouteName) -> Self {
        self.records.push(RouteRecord {
            pattern,
            segments: parse_pattern(pattern),
            target: Target::View(name),
        });
        self
    }

    /// Append a record redirecting `pattern` to the fixed path `to`.
    #[must_use]
    pub fn redirect(mut self, pattern: &'static str, to: &str) -> Self {
        self.records.push(RouteRecord {
            pattern,
            segments: parse_pattern(pattern),
            target: Target::Redirect(to.to_owned()),
        });
        self
    }

    /// Match `path` against the records in order.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidPath`] for relative paths, [`RouteError::NoMatch`]
    /// when no record (not even a catch-all) matches.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouteError> {
        let (normalized, parts) = normalize(path)?;
        for record in &self.records {
            let Some(params) = match_segments(&record.segments, &parts) else {
                continue;
            };
            return Ok(match &record.target {
                Target::View(name) => Resolution::Route(ResolvedRoute {
                    name: *name,
                    path: normalized,
                    params,
                }),
                Target::Redirect(to) => Resolution::Redirect(to.clone()),
            });
        }
        Err(RouteError::NoMatch(normalized))
    }

    /// Build the concrete path for `name`, filling parameters from `params`.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] if `name` has no record,
    /// [`RouteError::MissingParam`] if a `:param` segment has no value.
    pub fn path_for(&self, name: RouteName, params: &Params) -> Result<String, RouteError> {
        let record = self
            .records
            .iter()
            .find(|r| r.target == Target::View(name))
            .ok_or(RouteError::UnknownRoute(name))?;

        let mut path = String::new();
        for segment in &record.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(key) | Segment::CatchAll(key) => {
                    let value = params.get(key).ok_or_else(|| RouteError::MissingParam {
                        route: name,
                        param: key.clone(),
                    })?;
                    path.push_str(value);
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Declared pattern for `name`, if present.
    pub fn pattern_of(&self, name: RouteName) -> Option<&'static str> {
        self.records
            .iter()
            .find(|r| r.target == Target::View(name))
            .map(|r| r.pattern)
    }
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some(rest) => match rest.split_once('(') {
                Some((name, _)) => Segment::CatchAll(name.to_owned()),
                None => Segment::Param(rest.to_owned()),
            },
            None => Segment::Static(s.to_owned()),
        })
        .collect()
}

/// Drop query and fragment, collapse empty segments.
fn normalize(path: &str) -> Result<(String, Vec<&str>), RouteError> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return Ok(("/".to_owned(), Vec::new()));
    }
    if !path.starts_with('/') {
        return Err(RouteError::InvalidPath(path.to_owned()));
    }
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let normalized = format!("/{}", parts.join("/"));
    Ok((normalized, parts))
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> Option<Params> {
    let mut params = Params::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::CatchAll(key) => {
                params.insert(key.clone(), parts.get(i..).unwrap_or_default().join("/"));
                return Some(params);
            }
            Segment::Static(expected) => {
                if parts.get(i) != Some(&expected.as_str()) {
                    return None;
                }
            }
            Segment::Param(key) => {
                let value = parts.get(i)?;
                params.insert(key.clone(), (*value).to_owned());
            }
        }
    }
    (segments.len() == parts.len()).then_some(params)
}

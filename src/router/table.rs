use std::collections::HashSet;

use crate::error::{Error, Result};

use super::{PathPattern, Props, RouteMatch, ViewKind};

/// One row of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: PathPattern,
    pub name: String,
    pub view: ViewKind,
    /// Whether captured parameters are handed to the view as props.
    pub props: bool,
}

impl Route {
    pub fn new(pattern: &str, name: impl Into<String>, view: ViewKind, props: bool) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            name: name.into(),
            view,
            props,
        })
    }
}

/// An ordered, validated set of routes.
///
/// Patterns and names are unique. The first route whose pattern matches a
/// path wins.
///
/// # Examples
///
/// ```
/// use scatterscope::router::{RouteTable, ViewKind};
///
/// let table = RouteTable::default_routes();
/// let matched = table.resolve("/details/jazz").unwrap();
///
/// assert_eq!(matched.view, ViewKind::Detail);
/// assert_eq!(matched.props.get("genre"), Some("jazz"));
/// ```
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub const HOME: &'static str = "Home";
    pub const DETAIL_PLOT: &'static str = "DetailPlot";

    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut patterns = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !patterns.insert(route.pattern.as_str()) {
                return Err(Error::DuplicatePattern(route.pattern.to_string()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(Error::DuplicateName(route.name.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// `/` to the overview and `/details/:genre` to the detail view.
    pub fn default_routes() -> Self {
        let routes = vec![
            Route {
                pattern: PathPattern::root(),
                name: Self::HOME.to_string(),
                view: ViewKind::Overview,
                props: false,
            },
            Route {
                pattern: PathPattern::details(),
                name: Self::DETAIL_PLOT.to_string(),
                view: ViewKind::Detail,
                props: true,
            },
        ];
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Find the route for `path` and bind its parameters.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch> {
        for route in &self.routes {
            if let Some(captured) = route.pattern.matches(path) {
                let props = if route.props { captured } else { Props::new() };
                tracing::debug!(path, route = %route.name, "route resolved");
                return Ok(RouteMatch {
                    name: route.name.clone(),
                    view: route.view,
                    path: path.to_string(),
                    props,
                });
            }
        }
        tracing::debug!(path, "no route matched");
        Err(Error::NoRoute {
            path: path.to_string(),
        })
    }

    /// Build the path of the named route.
    pub fn reverse(&self, name: &str, params: &Props) -> Result<String> {
        let route = self.get(name).ok_or_else(|| Error::UnknownRoute {
            name: name.to_string(),
        })?;
        route
            .pattern
            .fill(params)
            .map_err(|param| Error::MissingParam {
                route: name.to_string(),
                param,
            })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_overview_without_props() {
        let table = RouteTable::default_routes();
        let matched = table.resolve("/").unwrap();

        assert_eq!(matched.name, "Home");
        assert_eq!(matched.view, ViewKind::Overview);
        assert!(matched.props.is_empty());
    }

    #[test]
    fn details_binds_genre() {
        let table = RouteTable::default_routes();
        let matched = table.resolve("/details/jazz").unwrap();

        assert_eq!(matched.name, "DetailPlot");
        assert_eq!(matched.view, ViewKind::Detail);
        assert_eq!(matched.props.get("genre"), Some("jazz"));
        assert_eq!(matched.props.len(), 1);
    }

    #[test]
    fn unmatched_path_is_an_error() {
        let table = RouteTable::default_routes();
        for path in ["/about", "", "/details", "//"] {
            assert!(matches!(table.resolve(path), Err(Error::NoRoute { .. })), "{path}");
        }
    }

    #[test]
    fn props_not_forwarded_when_disabled() {
        let table = RouteTable::new(vec![Route::new("/details/:genre", "Quiet", ViewKind::Detail, false).unwrap()])
            .unwrap();

        let matched = table.resolve("/details/folk").unwrap();
        assert!(matched.props.is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let dup_pattern = RouteTable::new(vec![
            Route::new("/", "A", ViewKind::Overview, false).unwrap(),
            Route::new("/", "B", ViewKind::Overview, false).unwrap(),
        ]);
        assert!(matches!(dup_pattern, Err(Error::DuplicatePattern(p)) if p == "/"));

        let dup_name = RouteTable::new(vec![
            Route::new("/", "A", ViewKind::Overview, false).unwrap(),
            Route::new("/details/:genre", "A", ViewKind::Detail, true).unwrap(),
        ]);
        assert!(matches!(dup_name, Err(Error::DuplicateName(n)) if n == "A"));
    }

    #[test]
    fn default_table_passes_validation() {
        let rebuilt = RouteTable::new(RouteTable::default_routes().routes().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn reverse_builds_paths() {
        let table = RouteTable::default_routes();
        let mut params = Props::new();
        params.insert("genre", "lofi");

        assert_eq!(table.reverse("Home", &Props::new()).unwrap(), "/");
        assert_eq!(table.reverse("DetailPlot", &params).unwrap(), "/details/lofi");
        assert!(matches!(
            table.reverse("DetailPlot", &Props::new()),
            Err(Error::MissingParam { param, .. }) if param == "genre"
        ));
        assert!(matches!(
            table.reverse("Nope", &params),
            Err(Error::UnknownRoute { .. })
        ));
    }
}

//! Sidebar navigation tree and route generation.
//!
//! The sidebar is a tree of [`NavItem`]s. Branches use the placeholder url
//! `"#"` and only group children; any node that names a [`ViewKind`] and a
//! real url becomes a route. Routes are produced by a depth-first walk, so
//! their order follows the sidebar top to bottom.

use std::fmt;

use serde::Serialize;

/// Placeholder url of a node that only groups children
pub const GROUP_URL: &str = "#";

/// The page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Overview,
    UserList,
    Anything4,
    ProductList,
    MainCategories,
    SubCategories,
    Reports,
    Settings,
    NotFound,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewKind::Overview => "overview",
            ViewKind::UserList => "user_list",
            ViewKind::Anything4 => "anything4",
            ViewKind::ProductList => "product_list",
            ViewKind::MainCategories => "main_categories",
            ViewKind::SubCategories => "sub_categories",
            ViewKind::Reports => "reports",
            ViewKind::Settings => "settings",
            ViewKind::NotFound => "not_found",
        };
        write!(f, "{s}")
    }
}

/// One node of the sidebar tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    /// Icon name for top-level entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// A node that renders `view` at `url`
    pub fn page(title: &str, url: &str, view: ViewKind) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            icon: None,
            view: Some(view),
            items: Vec::new(),
        }
    }

    /// A link without a page of its own
    pub fn link(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            icon: None,
            view: None,
            items: Vec::new(),
        }
    }

    /// A collapsible group of children
    pub fn group(title: &str, items: Vec<NavItem>) -> Self {
        Self {
            title: title.to_string(),
            url: GROUP_URL.to_string(),
            icon: None,
            view: None,
            items,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    fn route(&self) -> Option<Route> {
        match self.view {
            Some(view) if self.url != GROUP_URL => Some(Route {
                path: self.url.clone(),
                view,
            }),
            _ => None,
        }
    }
}

/// A path the router can render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub view: ViewKind,
}

/// Collect every routable node, depth-first in sidebar order.
///
/// Children are visited whether or not their parent is itself a route.
pub fn flatten_routes(items: &[NavItem]) -> Vec<Route> {
    let mut routes = Vec::new();
    collect_routes(items, &mut routes);
    routes
}

fn collect_routes(items: &[NavItem], out: &mut Vec<Route>) {
    for item in items {
        if let Some(route) = item.route() {
            out.push(route);
        }
        collect_routes(&item.items, out);
    }
}

/// Look up the view for `path`. The first matching route wins.
pub fn resolve(routes: &[Route], path: &str) -> Option<ViewKind> {
    routes.iter().find(|r| r.path == path).map(|r| r.view)
}

/// Like [`resolve`], falling back to the not-found page
pub fn resolve_or_not_found(routes: &[Route], path: &str) -> ViewKind {
    resolve(routes, path).unwrap_or(ViewKind::NotFound)
}

/// The dashboard's sidebar
pub fn default_sidebar() -> Vec<NavItem> {
    vec![
        NavItem::page("Dashboard", "/", ViewKind::Overview).with_icon("layout-dashboard"),
        NavItem::group(
            "Users",
            vec![
                NavItem::page("User List", "/dashboard/users/list", ViewKind::UserList),
                NavItem::group(
                    "Create User",
                    vec![NavItem::group(
                        "Anything",
                        vec![NavItem::group(
                            "Anything2",
                            vec![NavItem::group(
                                "Anything3",
                                vec![NavItem::page(
                                    "Anything4",
                                    "/dashboard/users/anything4",
                                    ViewKind::Anything4,
                                )],
                            )],
                        )],
                    )],
                ),
                NavItem::group(
                    "User Management",
                    vec![
                        NavItem::link("Profiles", "/dashboard/user-management/profiles"),
                        NavItem::link("Settings", "/dashboard/user-management/settings"),
                    ],
                ),
            ],
        )
        .with_icon("users"),
        NavItem::group(
            "Products",
            vec![
                NavItem::page("Product List", "/dashboard/products", ViewKind::ProductList),
                NavItem::group(
                    "Categories",
                    vec![
                        NavItem::page(
                            "Main Categories",
                            "/dashboard/categories/main",
                            ViewKind::MainCategories,
                        ),
                        NavItem::page(
                            "Sub Categories",
                            "/dashboard/categories/sub",
                            ViewKind::SubCategories,
                        ),
                    ],
                ),
            ],
        )
        .with_icon("shopping-cart"),
        NavItem::page("Reports", "/dashboard/reports", ViewKind::Reports).with_icon("file-text"),
        NavItem::page("Settings", "/dashboard/settings", ViewKind::Settings).with_icon("settings"),
    ]
}

/// One `path -> view` line per route
pub fn format_route_table(routes: &[Route]) -> String {
    routes
        .iter()
        .map(|r| format!("{} -> {}", r.path, r.view))
        .collect::<Vec<_>>()
        .join("\n")
}

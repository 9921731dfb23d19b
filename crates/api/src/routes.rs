//! Named routes for the Canto screens
//!
//! Hosts mount the commands under these paths. Redirect views carry both the
//! target's `canto:*` name and its path.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
}

pub const LIBRARY: Route = Route { name: "canto:library", path: "/canto/library/" };
pub const SETTINGS: Route = Route { name: "canto:settings", path: "/canto/settings/" };
pub const REFRESH_TOKEN: Route =
    Route { name: "canto:refresh-token", path: "/canto/refresh/" };
pub const DISCONNECT: Route = Route { name: "canto:disconnect", path: "/canto/disconnect/" };
pub const TREE: Route = Route { name: "canto:tree", path: "/canto/tree/" };
pub const SEARCH: Route = Route { name: "canto:search", path: "/canto/search/" };
pub const ALBUM: Route = Route { name: "canto:album", path: "/canto/album/" };
pub const BINARY: Route = Route { name: "canto:binary", path: "/canto/binary/" };

mod route_guard;
mod routes;

pub use self::route_guard::{GuardOutcome, RouteGuard};
pub use self::routes::{
    Audience, DASHBOARD_PATH, LOGIN_PATH, Layout, NavItem, PROFILE_PATH, RouteEntry, RouteTable,
};

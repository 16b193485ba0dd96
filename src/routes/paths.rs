//! Portal paths as leptos_router segments.
//!
//! The same constants are declared to `<Routes>` in the app and to the
//! [`RouteTable`](super::RouteTable) the guard resolves against, so the two
//! cannot drift apart.

use leptos_router::{ParamSegment, StaticSegment};

pub type Static = StaticSegment<&'static str>;

pub const ROOT: Static = StaticSegment("");
pub const LOGIN: Static = StaticSegment("login");

pub const USER_DASHBOARD: (Static, ParamSegment) = (StaticSegment("user"), ParamSegment("id"));
pub const USER_ORDERS: (Static, ParamSegment, Static) =
    (StaticSegment("user"), ParamSegment("id"), StaticSegment("orders"));

pub const HOTEL_DASHBOARD: (Static, ParamSegment) = (StaticSegment("hotel"), ParamSegment("id"));
pub const HOTEL_REVIEWS: (Static, ParamSegment, Static) =
    (StaticSegment("hotel"), ParamSegment("id"), StaticSegment("reviews"));
pub const HOTEL_ORDERS: (Static, ParamSegment, Static) =
    (StaticSegment("hotel"), ParamSegment("id"), StaticSegment("orders"));

pub const PROFILE: (Static, ParamSegment) = (StaticSegment("profile"), ParamSegment("id"));

use leptos_router::{ParamSegment, StaticSegment};

use super::*;

// =============================================================
// Role / RouteMeta
// =============================================================

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::User.dashboard_path("7"), "/user/7");
    assert_eq!(Role::Hotel.dashboard_path("5"), "/hotel/5");
}

#[test]
fn role_displays_stored_spelling() {
    assert_eq!(Role::User.to_string(), "USER");
    assert_eq!(Role::Hotel.to_string(), "HOTEL");
}

#[test]
fn role_meta_implies_auth() {
    let meta = RouteMeta::role(Role::Hotel);
    assert!(meta.requires_auth);
    assert_eq!(meta.role, Some(Role::Hotel));
    assert_eq!(RouteMeta::default(), RouteMeta::PUBLIC);
}

// =============================================================
// Route patterns
// =============================================================

#[test]
fn pattern_renders_segments() {
    assert_eq!(Route::redirect(paths::ROOT, "/login").pattern(), "/");
    assert_eq!(Route::view(paths::LOGIN, View::Login, RouteMeta::PUBLIC).pattern(), "/login");
    assert_eq!(
        Route::view(paths::HOTEL_REVIEWS, View::HotelReviews, RouteMeta::role(Role::Hotel)).pattern(),
        "/hotel/:id/reviews"
    );
}

// =============================================================
// RouteTable::resolve
// =============================================================

#[test]
fn resolve_first_declared_route_wins() {
    let table = RouteTable::new(vec![
        Route::view(paths::HOTEL_DASHBOARD, View::HotelDashboard, RouteMeta::role(Role::Hotel)),
        Route::view((StaticSegment("hotel"), ParamSegment("slug")), View::Profile, RouteMeta::PUBLIC),
    ]);
    let matched = table.resolve("/hotel/9").unwrap();
    assert_eq!(matched.view(), Some(View::HotelDashboard));
    assert_eq!(matched.param("id"), Some("9"));
    assert_eq!(matched.param("slug"), None);
}

#[test]
fn resolve_requires_the_whole_path() {
    let table = RouteTable::legacy();
    assert!(table.resolve("/user/3/orders").is_err());
    assert!(table.resolve("/user").is_err());
    assert!(table.resolve("/users/3").is_err());
}

#[test]
fn resolve_ignores_trailing_slash_query_and_fragment() {
    let table = RouteTable::token();
    let matched = table.resolve("/user/3/?tab=orders#top").unwrap();
    assert_eq!(matched.view(), Some(View::UserDashboard));
    assert_eq!(matched.param("id"), Some("3"));
    assert_eq!(matched.path, "/user/3/?tab=orders#top");
}

#[test]
fn resolve_unknown_path_is_not_found() {
    let table = RouteTable::legacy();
    assert_eq!(table.resolve("/admin"), Err(RouteError::NotFound("/admin".to_owned())));
}

#[test]
fn resolve_is_deterministic() {
    let table = RouteTable::token();
    assert_eq!(table.resolve("/hotel/5/reviews"), table.resolve("/hotel/5/reviews"));
}

#[test]
fn legacy_root_redirects_to_login() {
    let table = RouteTable::legacy();
    let root = table.resolve("/").unwrap();
    assert_eq!(root.target, RouteTarget::Redirect("/login".to_owned()));
    assert_eq!(root.meta, RouteMeta::PUBLIC);
    assert_eq!(table.resolve("/login").unwrap().view(), Some(View::Login));
}

#[test]
fn legacy_has_no_sub_resources() {
    let table = RouteTable::legacy();
    assert!(table.resolve("/hotel/3/reviews").is_err());
    assert!(table.resolve("/hotel/3/orders").is_err());
    assert!(table.resolve("/profile/3").is_err());
}

#[test]
fn token_table_declares_every_portal_path() {
    let table = RouteTable::token();
    let cases = [
        ("/", View::Login, RouteMeta::PUBLIC),
        ("/login", View::Login, RouteMeta::PUBLIC),
        ("/user/3", View::UserDashboard, RouteMeta::role(Role::User)),
        ("/user/3/orders", View::UserOrders, RouteMeta::role(Role::User)),
        ("/hotel/3", View::HotelDashboard, RouteMeta::role(Role::Hotel)),
        ("/hotel/3/reviews", View::HotelReviews, RouteMeta::role(Role::Hotel)),
        ("/hotel/3/orders", View::HotelOrders, RouteMeta::role(Role::Hotel)),
        ("/profile/3", View::Profile, RouteMeta::authenticated()),
    ];
    for (path, view, meta) in cases {
        let matched = table.resolve(path).unwrap();
        assert_eq!(matched.view(), Some(view), "{path}");
        assert_eq!(matched.meta, meta, "{path}");
    }
    assert_eq!(table.routes().len(), cases.len());
}

#[test]
fn for_mode_selects_table() {
    assert_eq!(RouteTable::for_mode(SessionMode::Legacy), RouteTable::legacy());
    assert_eq!(RouteTable::for_mode(SessionMode::Token), RouteTable::token());
}

use super::*;

use crate::test_support::disk1;

#[test]
fn paths_map_to_routes() {
    assert_eq!("/".parse::<Route>(), Ok(Route::Console));
    assert_eq!("/discos".parse::<Route>(), Ok(Route::Catalog));
    assert_eq!("/discos/".parse::<Route>(), Ok(Route::Catalog));
    assert_eq!(
        "/viewer/disk1".parse::<Route>(),
        Ok(Route::Viewer {
            name: "disk1".to_string()
        })
    );
    assert_eq!(
        "/viewer/".parse::<Route>(),
        Err(RouteError::UnknownPath("/viewer/".to_string()))
    );
    assert!("/viewer/a/b".parse::<Route>().is_err());
    assert!("/settings".parse::<Route>().is_err());
}

#[test]
fn routes_format_back_to_paths() {
    for p in ["/", "/discos", "/viewer/disk1"] {
        let r: Route = p.parse().expect("parse");
        assert_eq!(r.to_string(), p);
    }
}

#[test]
fn selecting_a_disk_carries_it_to_the_viewer() {
    let mut router = Router::new();
    router.navigate(Route::Catalog, None);
    router.open_disk(disk1());

    assert_eq!(router.current().to_string(), "/viewer/disk1");
    let Screen::Viewer(detail) = router.screen() else {
        panic!("expected viewer");
    };
    assert!(detail.is_found());
}

#[test]
fn direct_navigation_renders_not_found() {
    let mut router = Router::new();
    router.navigate_path("/viewer/disk1", None).expect("navigate");
    let Screen::Viewer(detail) = router.screen() else {
        panic!("expected viewer");
    };
    assert!(!detail.is_found());
}

#[test]
fn leaving_the_viewer_evicts_carried_disks() {
    let mut router = Router::new();
    router.open_disk(disk1());
    assert_eq!(router.navigation_store().len(), 1);

    router.navigate(Route::Catalog, None);
    assert!(router.navigation_store().is_empty());

    router.navigate_path("/viewer/disk1", None).expect("navigate");
    let Screen::Viewer(detail) = router.screen() else {
        panic!("expected viewer");
    };
    assert!(!detail.is_found());
}

#[test]
fn mismatched_carried_disk_is_ignored() {
    let mut router = Router::new();
    router.navigate(
        Route::Viewer {
            name: "other".to_string(),
        },
        Some(disk1()),
    );
    assert!(router.navigation_store().is_empty());
}

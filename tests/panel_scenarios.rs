//! End-to-end panel scenarios against the in-memory host fakes

use modpanel_app::test_utils::*;
use modpanel_app::{
    FeatureFlags, Message, ModerationAction, NavigationState, Outcome, Page, Settings,
};
use modpanel_core::{Surface, UserRecord};

fn grid_cells(surface: &Surface) -> Vec<String> {
    surface
        .buttons()
        .filter(|b| b.command.starts_with("modpanel.switch PlayerPage "))
        .map(|b| b.text.clone())
        .collect()
}

#[test]
fn test_second_page_of_45_users() {
    let (mut router, recorder) = test_router(online_users(45));
    let viewer = test_viewer();

    let page = router
        .open(&viewer, NavigationState::UserList, Some("1"))
        .unwrap();

    assert_eq!(page, Page::UserList { page: 1 });
    let surface = recorder.last_surface().unwrap();
    assert_eq!(
        grid_cells(&surface),
        vec!["user40", "user41", "user42", "user43", "user44"]
    );
    assert_eq!(
        surface.button_with_text("<<").unwrap().command,
        "modpanel.switch Players 0"
    );
    assert_eq!(surface.button_with_text(">>").unwrap().command, "");
}

#[test]
fn test_page_number_at_usize_max_renders_empty_page() {
    let (mut router, recorder) = test_router(online_users(45));
    let viewer = test_viewer();

    let page = router
        .open(&viewer, NavigationState::UserList, Some(&usize::MAX.to_string()))
        .unwrap();

    assert_eq!(page, Page::UserList { page: usize::MAX });
    let surface = recorder.last_surface().unwrap();
    assert!(grid_cells(&surface).is_empty());
    assert!(router.sessions().is_open(TEST_VIEWER_ID));
}

#[test]
fn test_detail_with_invalid_id_shows_viewer() {
    let mut users = online_users(2);
    users.push(UserRecord::online(TEST_VIEWER_ID, "Admin"));
    let (mut router, recorder) = test_router(users);

    let page = router
        .open(&test_viewer(), NavigationState::UserDetail, Some("not-a-number"))
        .unwrap();

    assert_eq!(
        page,
        Page::UserDetail {
            target: TEST_VIEWER_ID
        }
    );
    let surface = recorder.last_surface().unwrap();
    let title = format!("Admin ({})", TEST_VIEWER_ID);
    assert!(surface.labels().any(|l| l.text == title));
}

#[test]
fn test_ban_submit_without_input_dispatches_nothing() {
    let (mut router, recorder) = test_router(online_users(3));
    let viewer = test_viewer();

    router.open(&viewer, NavigationState::Main, None).unwrap();
    let outcome = router.handle(&viewer, Message::SubmitBanId).unwrap();

    assert_eq!(outcome, Outcome::Ignored);
    assert!(recorder.dispatches().is_empty());
}

#[test]
fn test_each_open_is_one_destroy_then_one_render() {
    let (mut router, recorder) = test_router(online_users(3));
    let viewer = test_viewer();

    router.open(&viewer, NavigationState::Main, None).unwrap();
    router
        .open(&viewer, NavigationState::UserListBanned, None)
        .unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 4);
    for pair in calls.chunks(2) {
        assert!(matches!(pair[0], HostCall::Destroy { .. }));
        assert!(matches!(pair[1], HostCall::Render { .. }));
    }
    assert_eq!(router.sessions().len(), 1);
}

#[test]
fn test_switch_commands_from_rendered_buttons_round_trip() {
    let (mut router, recorder) = test_router(online_users(45));
    let viewer = test_viewer();

    router.handle_command(&viewer, "modpanel.switch Players").unwrap();
    let next = recorder
        .last_surface()
        .unwrap()
        .button_with_text(">>")
        .unwrap()
        .command
        .clone();

    let outcome = router.handle_command(&viewer, &next).unwrap();
    assert_eq!(outcome, Outcome::Rendered(Page::UserList { page: 1 }));

    let cell = recorder
        .last_surface()
        .unwrap()
        .buttons()
        .find(|b| b.text == "user42")
        .unwrap()
        .command
        .clone();
    let outcome = router.handle_command(&viewer, &cell).unwrap();
    assert_eq!(outcome, Outcome::Rendered(Page::UserDetail { target: 1042 }));
}

#[test]
fn test_disabled_features_render_inert_buttons() {
    let settings = Settings {
        features: FeatureFlags::all_disabled(),
        ..Settings::default()
    };
    let (mut router, recorder) =
        test_router_with(online_users(1), StaticPermissions::AllowAll, settings);
    let viewer = test_viewer();

    router
        .handle_command(&viewer, "modpanel.switch PlayerPage 1000")
        .unwrap();
    let surface = recorder.last_surface().unwrap();
    let kick = surface.button_with_text("Kick").unwrap().command.clone();

    assert_eq!(kick, "");
    assert!(surface.labels().any(|l| l.text == "Name: user0"));

    let outcome = router
        .handle_command(&viewer, "modpanel.kick 1000")
        .unwrap();
    assert_eq!(outcome, Outcome::Ignored);
}

#[test]
fn test_denied_viewer_gets_reply_only() {
    let (mut router, recorder) = test_router_with(
        online_users(1),
        StaticPermissions::only(["modpanel.show"]),
        Settings::default(),
    );
    let viewer = test_viewer();

    let outcome = router
        .handle_command(&viewer, "modpanel.ban 1000")
        .unwrap();

    assert!(matches!(outcome, Outcome::Denied { .. }));
    assert!(recorder.dispatches().is_empty());
    assert_eq!(recorder.replies().len(), 1);
    assert_eq!(recorder.render_count(), 0);
}

#[test]
fn test_ban_by_id_flow() {
    let (mut router, recorder) = test_router(online_users(3));
    let viewer = test_viewer();

    router.handle_command(&viewer, "modpanel").unwrap();
    router
        .handle_command(&viewer, "modpanel.banid.text 1002")
        .unwrap();
    router.handle_command(&viewer, "modpanel.banid").unwrap();

    assert_eq!(
        recorder.dispatches(),
        vec![(ModerationAction::Ban, 1002, None)]
    );
    assert_eq!(recorder.replies(), vec!["ban applied to 1002".to_string()]);
    let main = recorder.last_surface().unwrap();
    assert!(main.button_with_text("Ban").is_some());
}

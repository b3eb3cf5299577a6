#![cfg(test)]

use crate::error::{DashboardError, NavigationError};
use crate::navigator::{RecordingSaveHandler, SaveFn, Trigger, ViewMode, ViewNavigator, ViewState};

// --- Test Utilities ---

type TestNavigator = ViewNavigator<String, RecordingSaveHandler<String>>;

fn navigator() -> TestNavigator {
    ViewNavigator::new(RecordingSaveHandler::default())
}

fn navigator_in(state: ViewState<String>) -> TestNavigator {
    let mut nav = navigator();
    match state {
        ViewState::List => {}
        ViewState::Detail(id) => nav.select_entity(id).unwrap(),
        ViewState::Create => nav.create_requested().unwrap(),
        ViewState::Edit(id) => nav.edit_requested(id),
    }
    nav
}

fn all_states() -> Vec<ViewState<String>> {
    vec![
        ViewState::List,
        ViewState::Detail("1".into()),
        ViewState::Create,
        ViewState::Edit("2".into()),
    ]
}

// --- Transitions ---

#[test]
fn test_starts_in_list_without_selection() {
    let nav = navigator();
    assert_eq!(nav.state(), &ViewState::List);
    assert_eq!(nav.mode(), ViewMode::List);
    assert_eq!(nav.selected_id(), None);
}

#[test]
fn test_select_then_back() {
    let mut nav = navigator();
    nav.select_entity("42".into()).unwrap();
    assert_eq!(nav.state(), &ViewState::Detail("42".to_string()));
    assert_eq!(nav.selected_id().map(String::as_str), Some("42"));

    nav.back();
    assert_eq!(nav.state(), &ViewState::List);
    assert_eq!(nav.selected_id(), None);
}

#[test]
fn test_edit_from_detail_keeps_id() {
    let mut nav = navigator_in(ViewState::Detail("7".into()));
    nav.edit_requested("7".into());
    assert_eq!(nav.state(), &ViewState::Edit("7".to_string()));
}

#[test]
fn test_edit_reachable_from_every_state() {
    for state in all_states() {
        let mut nav = navigator_in(state);
        nav.edit_requested("9".into());
        assert_eq!(nav.state(), &ViewState::Edit("9".to_string()));
    }
}

#[test]
fn test_back_always_lands_in_list() {
    for state in all_states() {
        let mut nav = navigator_in(state);
        nav.back();
        assert_eq!(nav.state(), &ViewState::List);
    }
}

#[test]
fn test_back_twice_from_list_is_noop() {
    let mut nav = navigator();
    nav.back();
    nav.back();
    assert_eq!(nav.state(), &ViewState::List);
}

#[test]
fn test_unlisted_triggers_are_rejected_without_state_change() {
    let mut nav = navigator_in(ViewState::Detail("1".into()));
    let err = nav.select_entity("2".into()).unwrap_err();
    assert_eq!(
        err,
        NavigationError::InvalidTransition { from: ViewMode::Detail, trigger: Trigger::SelectEntity }
    );
    assert_eq!(nav.create_requested().unwrap_err(), NavigationError::InvalidTransition {
        from: ViewMode::Detail,
        trigger: Trigger::CreateRequested,
    });
    assert_eq!(nav.state(), &ViewState::Detail("1".to_string()));

    let mut nav = navigator_in(ViewState::Create);
    assert!(nav.select_entity("3".into()).is_err());
    assert!(nav.create_requested().is_err());
    assert_eq!(nav.state(), &ViewState::Create);
}

// --- Saving ---

#[test]
fn test_saved_from_create_forwards_payload_once() {
    let mut nav = navigator_in(ViewState::Create);
    nav.saved("new project".into()).unwrap();
    assert_eq!(nav.state(), &ViewState::List);
    assert_eq!(nav.save_handler().calls, 1);
    assert_eq!(nav.save_handler().saved, vec!["new project".to_string()]);
}

#[test]
fn test_saved_from_edit_clears_selection() {
    let mut nav = navigator_in(ViewState::Edit("5".into()));
    nav.saved("changes".into()).unwrap();
    assert_eq!(nav.selected_id(), None);
    assert_eq!(nav.save_handler().saved.len(), 1);
}

#[test]
fn test_saved_outside_form_never_calls_handler() {
    for state in [ViewState::List, ViewState::Detail("1".to_string())] {
        let mut nav = navigator_in(state.clone());
        let err = nav.saved("x".into()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Navigation(NavigationError::InvalidTransition { trigger: Trigger::Saved, .. })
        ));
        assert_eq!(nav.state(), &state);
        assert_eq!(nav.save_handler().calls, 0);
    }
}

#[test]
fn test_failed_save_stays_in_form() {
    let mut nav = navigator_in(ViewState::Edit("3".into()));
    nav.save_handler_mut().fail_next("backend unavailable");

    let err = nav.saved("first".into()).unwrap_err();
    assert_eq!(err, DashboardError::Save("backend unavailable".into()));
    assert_eq!(nav.state(), &ViewState::Edit("3".to_string()));

    // Retry succeeds.
    nav.saved("second".into()).unwrap();
    assert_eq!(nav.state(), &ViewState::List);
    assert_eq!(nav.save_handler().calls, 2);
    assert_eq!(nav.save_handler().saved, vec!["second".to_string()]);
}

#[test]
fn test_closure_handler() {
    let mut seen = Vec::new();
    {
        let mut nav: ViewNavigator<u32, _> = ViewNavigator::new(SaveFn::new(|p: String| {
            seen.push(p);
            Ok(())
        }));
        nav.create_requested().unwrap();
        nav.saved("draft".to_string()).unwrap();
        assert_eq!(nav.mode(), ViewMode::List);
    }
    assert_eq!(seen, vec!["draft".to_string()]);
}

#[test]
fn test_logging_handler_accepts_everything() {
    let mut nav: ViewNavigator<String, _> = ViewNavigator::with_logging("project");
    nav.create_requested().unwrap();
    nav.saved(vec![1u8, 2, 3]).unwrap();
    assert_eq!(nav.mode(), ViewMode::List);
    assert_eq!(nav.save_handler().entity(), "project");
}

// --- Dispatch ---

#[test]
fn test_dispatch_by_trigger() {
    let mut nav = navigator();
    nav.dispatch(Trigger::SelectEntity, Some("1".into())).unwrap();
    nav.dispatch(Trigger::EditRequested, Some("1".into())).unwrap();
    assert_eq!(nav.state(), &ViewState::Edit("1".to_string()));
    nav.dispatch(Trigger::Back, None).unwrap();
    nav.dispatch(Trigger::CreateRequested, None).unwrap();
    assert_eq!(nav.state(), &ViewState::Create);
}

#[test]
fn test_dispatch_rejects_missing_id_and_saved() {
    let mut nav = navigator();
    assert_eq!(
        nav.dispatch(Trigger::SelectEntity, None),
        Err(NavigationError::MissingId { trigger: Trigger::SelectEntity })
    );
    assert!(nav.dispatch(Trigger::Saved, None).is_err());
    assert_eq!(nav.state(), &ViewState::List);
}

#[test]
fn test_dispatch_edit_without_id_is_missing_id_not_transition() {
    for state in all_states() {
        let mut nav = navigator_in(state.clone());
        let err = nav.dispatch(Trigger::EditRequested, None).unwrap_err();
        assert_eq!(err, NavigationError::MissingId { trigger: Trigger::EditRequested });
        assert_eq!(err.to_string(), "edit_requested needs an entity id");
        assert_eq!(nav.state(), &state);
    }
}

#[test]
fn test_state_serializes_with_mode_tag() {
    let json = serde_json::to_value(ViewState::Detail("42".to_string())).unwrap();
    assert_eq!(json, serde_json::json!({"mode": "detail", "selectedEntityId": "42"}));
    let list: ViewState<String> = serde_json::from_value(serde_json::json!({"mode": "list"})).unwrap();
    assert_eq!(list, ViewState::List);
}

#[test]
fn test_error_messages() {
    let err = NavigationError::InvalidTransition { from: ViewMode::List, trigger: Trigger::Saved };
    assert_eq!(err.to_string(), "saved is not allowed from the list view");
}

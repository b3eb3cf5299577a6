use proptest::prelude::*;
use sitepro_core::navigator::RecordingSaveHandler;
use sitepro_core::{ViewMode, ViewNavigator, ViewState};

#[derive(Debug, Clone)]
enum Op {
    Select(u8),
    Create,
    Edit(u8),
    Back,
    Save,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Select),
        Just(Op::Create),
        any::<u8>().prop_map(Op::Edit),
        Just(Op::Back),
        Just(Op::Save),
    ]
}

/// Reference transition table.
fn expected(state: &ViewState<u8>, op: &Op) -> Option<ViewState<u8>> {
    match (state, op) {
        (ViewState::List, Op::Select(id)) => Some(ViewState::Detail(*id)),
        (ViewState::List, Op::Create) => Some(ViewState::Create),
        (_, Op::Edit(id)) => Some(ViewState::Edit(*id)),
        (_, Op::Back) => Some(ViewState::List),
        (ViewState::Create | ViewState::Edit(_), Op::Save) => Some(ViewState::List),
        _ => None,
    }
}

proptest! {
    /// Any trigger sequence follows the table; rejected triggers leave the state alone.
    #[test]
    fn prop_navigator_follows_table(ops in proptest::collection::vec(op(), 0..64)) {
        let mut nav: ViewNavigator<u8, RecordingSaveHandler<usize>> = ViewNavigator::new(RecordingSaveHandler::default());
        let mut saves = 0usize;
        for (step, op) in ops.iter().enumerate() {
            let before = nav.state().clone();
            let ok = match op {
                Op::Select(id) => nav.select_entity(*id).is_ok(),
                Op::Create => nav.create_requested().is_ok(),
                Op::Edit(id) => { nav.edit_requested(*id); true }
                Op::Back => { nav.back(); true }
                Op::Save => nav.saved(step).is_ok(),
            };
            match expected(&before, op) {
                Some(next) => {
                    prop_assert!(ok);
                    prop_assert_eq!(nav.state(), &next);
                    if matches!(op, Op::Save) {
                        saves += 1;
                    }
                }
                None => {
                    prop_assert!(!ok);
                    prop_assert_eq!(nav.state(), &before);
                }
            }
        }
        prop_assert_eq!(nav.save_handler().calls, saves);
        prop_assert_eq!(nav.save_handler().saved.len(), saves);
    }

    /// Only Detail and Edit carry an id.
    #[test]
    fn prop_selection_matches_mode(ops in proptest::collection::vec(op(), 0..32)) {
        let mut nav: ViewNavigator<u8, RecordingSaveHandler<()>> = ViewNavigator::new(RecordingSaveHandler::default());
        for op in &ops {
            let _ = match op {
                Op::Select(id) => nav.select_entity(*id).map_err(drop),
                Op::Create => nav.create_requested().map_err(drop),
                Op::Edit(id) => { nav.edit_requested(*id); Ok(()) }
                Op::Back => { nav.back(); Ok(()) }
                Op::Save => nav.saved(()).map_err(drop),
            };
            let has_id = nav.selected_id().is_some();
            prop_assert_eq!(has_id, matches!(nav.mode(), ViewMode::Detail | ViewMode::Edit));
        }
    }
}

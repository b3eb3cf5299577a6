#![no_main]

use libfuzzer_sys::fuzz_target;
use sitepro_core::navigator::RecordingSaveHandler;
use sitepro_core::{ViewMode, ViewNavigator};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Step {
    Select(u16),
    Create,
    Edit(u16),
    Back,
    Save { fail: bool },
}

fuzz_target!(|steps: Vec<Step>| {
    let mut nav: ViewNavigator<u16, RecordingSaveHandler<u16>> = ViewNavigator::new(RecordingSaveHandler::default());
    for (i, step) in steps.into_iter().enumerate() {
        let before = nav.state().clone();
        let accepted = match step {
            Step::Select(id) => nav.select_entity(id).is_ok(),
            Step::Create => nav.create_requested().is_ok(),
            Step::Edit(id) => {
                nav.edit_requested(id);
                true
            }
            Step::Back => {
                nav.back();
                true
            }
            Step::Save { fail } => {
                if fail {
                    nav.save_handler_mut().fail_next("fuzz");
                }
                nav.saved(i as u16).is_ok()
            }
        };
        if !accepted {
            assert_eq!(nav.state(), &before);
        }
        assert_eq!(nav.selected_id().is_some(), matches!(nav.mode(), ViewMode::Detail | ViewMode::Edit));
    }
});

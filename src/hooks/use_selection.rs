use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;
use crate::models::selection::{Selection, SelectionAction};
use crate::models::skip::Skip;

/// Handle returned by `use_selection`
#[derive(Clone, PartialEq)]
pub struct SelectionHandle {
    pub selection: Selection,
    pub toggle: Callback<Rc<Skip>>,
    pub remove: Callback<()>,
}

/// Single-selection state with a delayed clear after deselection.
#[hook]
pub fn use_selection() -> SelectionHandle {
    let selection = use_reducer(Selection::default);

    // Each deselection gets one timer tagged with its generation. A new
    // transition or unmount drops the pending timer; the reducer also ignores
    // clears for old generations.
    {
        let dispatcher = selection.dispatcher();
        let key = (selection.generation(), selection.is_leaving());

        use_effect_with(key, move |&(generation, leaving)| {
            let timeout = leaving.then(|| {
                Timeout::new(Config::DESELECT_DELAY_MS, move || {
                    dispatcher.dispatch(SelectionAction::Clear { generation });
                })
            });

            move || drop(timeout)
        });
    }

    let toggle = {
        let selection = selection.clone();
        Callback::from(move |skip: Rc<Skip>| selection.dispatch(SelectionAction::Toggle(skip)))
    };

    let remove = {
        let selection = selection.clone();
        Callback::from(move |()| selection.dispatch(SelectionAction::Remove))
    };

    SelectionHandle {
        selection: (*selection).clone(),
        toggle,
        remove,
    }
}

use crate::models::{selection::Selection, skip::Skip};
use std::rc::Rc;
use yew::prelude::*;

use super::SkipCard;

#[derive(Properties, PartialEq)]
pub struct SkipGridProps {
    pub skips: Rc<Vec<Skip>>,
    pub selection: Selection,
    pub on_toggle: Callback<Rc<Skip>>,
}

/// One card per skip, in the order the API returned them.
#[function_component(SkipGrid)]
pub fn skip_grid(props: &SkipGridProps) -> Html {
    // Cards hand out `Rc<Skip>` to the selection; build them once per list.
    let skips = use_memo(props.skips.clone(), |skips| {
        skips.iter().cloned().map(Rc::new).collect::<Vec<_>>()
    });

    html! {
        <section class="skip-grid">
            {
                skips.iter().map(|skip| html! {
                    <SkipCard
                        key={skip.id}
                        skip={skip.clone()}
                        selected={props.selection.is_selected(skip.id)}
                        on_toggle={props.on_toggle.clone()}
                    />
                }).collect::<Html>()
            }
        </section>
    }
}

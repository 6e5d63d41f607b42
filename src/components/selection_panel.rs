use crate::models::{selection::Selection, skip::SUMMARY_ROUNDING};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectionPanelProps {
    pub selection: Selection,
    pub on_remove: Callback<()>,
}

/// Floating summary of the chosen skip. Stays mounted while fading out.
#[function_component(SelectionPanel)]
pub fn selection_panel(props: &SelectionPanelProps) -> Html {
    let Some(skip) = props.selection.skip() else {
        return html! {};
    };

    let class = classes!(
        "selection-panel",
        if props.selection.is_visible() { "shown" } else { "hidden" }
    );

    let onclick = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(()))
    };

    html! {
        <aside {class}>
            <div class="selection-panel-header">
                <h2>{"Your Selection"}</h2>
            </div>
            <div class="selection-panel-body">
                <h3>{skip.title()}</h3>
                <p>{format!("Hire Period: {} days", skip.hire_period_days)}</p>
                <p>{format!("Total Price: {}", skip.display_price(SUMMARY_ROUNDING))}</p>
                <button class="selection-panel-remove" {onclick}>{"Remove Selection"}</button>
            </div>
        </aside>
    }
}

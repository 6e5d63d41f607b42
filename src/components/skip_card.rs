use crate::models::skip::{CARD_ROUNDING, Skip};
use std::rc::Rc;
use yew::prelude::*;

pub const SELECT_LABEL: &str = "Select This Skip";
pub const DESELECT_LABEL: &str = "Deselect";
pub const ROAD_BADGE: &str = "Not Allowed On The Road";

#[derive(Properties, PartialEq)]
pub struct SkipCardProps {
    pub skip: Rc<Skip>,
    pub selected: bool,
    pub on_toggle: Callback<Rc<Skip>>,
}

pub const fn toggle_label(selected: bool) -> &'static str {
    if selected { DESELECT_LABEL } else { SELECT_LABEL }
}

#[function_component(SkipCard)]
pub fn skip_card(props: &SkipCardProps) -> Html {
    let skip = &props.skip;

    let onclick = {
        let skip = skip.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(skip.clone()))
    };

    html! {
        <div class={classes!("skip-card", props.selected.then_some("selected"))}>
            <div class="skip-card-media">
                <img src={skip.image_url()} alt={skip.image_alt()} />

                <div class="skip-card-caption">
                    <h3>{skip.title()}</h3>
                    <p>{format!("{} day hire period", skip.hire_period_days)}</p>
                </div>

                if skip.shows_road_badge() {
                    <div class="road-badge">{ROAD_BADGE}</div>
                }
            </div>

            <div class="skip-card-footer">
                <span class="skip-card-price">{skip.display_price(CARD_ROUNDING)}</span>
                <button class="skip-card-toggle" {onclick}>
                    {toggle_label(props.selected)}
                </button>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::hooks::use_theme::{Theme, use_theme};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let (icon, label) = match theme.shown {
        Theme::Dark => ("fa-solid fa-sun", "Switch to light mode"),
        Theme::Light | Theme::System => ("fa-solid fa-moon", "Switch to dark mode"),
    };

    let onclick = {
        let toggle = theme.toggle;
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} title={label}>
            <i class={icon}></i>
        </button>
    }
}

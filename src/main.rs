use yew::prelude::*;

use skip_picker::components::{
    BookingSteps, ErrorPage, Loading, SelectionPanel, SkipGrid, ThemeToggle,
};
use skip_picker::hooks::{
    use_selection::use_selection,
    use_skips::{DataState, use_skips},
};
use skip_picker::services::api::ApiConfig;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ApiConfig::default());
    let state = use_skips((*config).clone());
    let selection = use_selection();

    // Any load failure replaces the whole page
    if let DataState::Error(error) = &*state {
        return html! { <ErrorPage error={error.clone()} /> };
    }

    html! {
        <div class="app-container">
            <header class="app-header">
                <ThemeToggle />
                <BookingSteps />
                <div class="page-heading">
                    <h1>{"Choose Your Skip Size"}</h1>
                    <p>{"Select the skip size that best suits your needs"}</p>
                </div>
            </header>

            <main class="app-main">
                if state.is_loading() {
                    <Loading />
                }
                if let Some(skips) = state.data() {
                    <SkipGrid
                        skips={skips.clone()}
                        selection={selection.selection.clone()}
                        on_toggle={selection.toggle.clone()}
                    />
                }
            </main>

            <SelectionPanel
                selection={selection.selection.clone()}
                on_remove={selection.remove.clone()}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

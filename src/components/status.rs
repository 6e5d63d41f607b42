use crate::models::error::AppError;
use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading skips..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    pub error: AppError,
}

/// Replaces the whole page when the skip list could not be loaded.
#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    html! {
        <div class="status error">{error_text(&props.error)}</div>
    }
}

pub fn error_text(error: &AppError) -> String {
    format!("Error: {error}")
}

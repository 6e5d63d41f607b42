use crate::models::{error::AppError, skip::Skip};
use crate::services::api::{ApiConfig, fetch_skips};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Vec<Skip>>),
    Error(AppError),
}

impl DataState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn data(&self) -> Option<&Rc<Vec<Skip>>> {
        match self {
            Self::Loaded(skips) => Some(skips),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&AppError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Result<Vec<Skip>, AppError>> for DataState {
    fn from(result: Result<Vec<Skip>, AppError>) -> Self {
        match result {
            Ok(skips) => Self::Loaded(Rc::new(skips)),
            Err(e) => Self::Error(e),
        }
    }
}

/// Loads the skip list once per mount (and again only if `config` changes).
#[hook]
pub fn use_skips(config: ApiConfig) -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(config, move |config| {
            let config = config.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(DataState::Loading);
            gloo::console::log!(format!("Loading skips for {}", config.location()));

            spawn_local(async move {
                let result = fetch_skips(config).await;

                // Unmounted while the request was in flight
                if aborted_check.get() {
                    return;
                }

                match &result {
                    Ok(skips) => gloo::console::log!(format!("Loaded {} skips", skips.len())),
                    Err(e) => gloo::console::error!(format!(
                        "Failed to load skips ({:?}): {e}",
                        e.kind()
                    )),
                }
                state.set(result.into());
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}

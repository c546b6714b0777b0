use dioxus::prelude::*;
use tracing::error;

use crate::{
    config::DashboardConfig,
    domain::ListState,
    infra::api::{ApiClient, Listing},
    ui::components::toast::{push_toast, ToastMessage},
};

/// Fetches a collection once when the calling component mounts.
///
/// The fetch is not retried and not repeated while the component stays
/// mounted. A failure is logged and leaves the list empty; it only reaches the
/// user when `surface_fetch_errors` is enabled. There is no explicit
/// cancellation: the future belongs to the component scope and is dropped with
/// it.
pub fn use_listing<R: Listing>() -> Signal<ListState<R>> {
    let client = use_context::<ApiClient>();
    let surface_errors = use_context::<DashboardConfig>().surface_fetch_errors;
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let state = use_signal(ListState::<R>::default);

    use_future(move || {
        let client = client.clone();
        let mut state = state;
        async move {
            let (next, failure) = ListState::from_outcome(client.list::<R>().await);
            if let Some(err) = failure {
                error!(resource = R::COLLECTION, "failed to load listing: {err}");
                if surface_errors {
                    push_toast(toasts, format!("Не удалось загрузить данные: {err}"));
                }
            }
            state.set(next);
        }
    });

    state
}

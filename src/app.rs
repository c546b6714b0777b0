use dioxus::prelude::*;

use crate::{
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{DashboardPage, DistributionRulesPage, LogistsPage, OrdersPage, PlatformsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/orders")]
    Orders {},
    #[route("/distribution-rules")]
    DistributionRules {},
    #[route("/logists")]
    Logists {},
    #[route("/platforms")]
    Platforms {},
}

/// Root component. `ApiClient` and `DashboardConfig` are supplied as launch
/// contexts; every view fetches its own collection.
#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Orders() -> Element {
    rsx! { Shell { OrdersPage {} } }
}

#[component]
pub fn DistributionRules() -> Element {
    rsx! { Shell { DistributionRulesPage {} } }
}

#[component]
pub fn Logists() -> Element {
    rsx! { Shell { LogistsPage {} } }
}

#[component]
pub fn Platforms() -> Element {
    rsx! { Shell { PlatformsPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        let cases = [
            (Route::Dashboard {}, "/"),
            (Route::Orders {}, "/orders"),
            (Route::DistributionRules {}, "/distribution-rules"),
            (Route::Logists {}, "/logists"),
            (Route::Platforms {}, "/platforms"),
        ];
        for (route, path) in cases {
            assert_eq!(route.to_string(), path);
            assert!(path.parse::<Route>().ok() == Some(route));
        }
    }
}

use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "shell",
            header { class: "shell__header",
                h1 { class: "shell__title", "{APP_NAME}" }
                nav { class: "shell__nav",
                    NavButton { active: matches!(current_route, Route::Dashboard {}), onclick: move |_| { nav.push(Route::Dashboard {}); }, label: "Dashboard" }
                    NavButton { active: matches!(current_route, Route::Orders {}), onclick: move |_| { nav.push(Route::Orders {}); }, label: "Заказы" }
                    NavButton { active: matches!(current_route, Route::DistributionRules {}), onclick: move |_| { nav.push(Route::DistributionRules {}); }, label: "Правила распределения" }
                    NavButton { active: matches!(current_route, Route::Logists {}), onclick: move |_| { nav.push(Route::Logists {}); }, label: "Логисты" }
                    NavButton { active: matches!(current_route, Route::Platforms {}), onclick: move |_| { nav.push(Route::Platforms {}); }, label: "Площадки" }
                }
            }
            main { class: "shell__main",
                {children}
            }
            footer { class: "shell__footer {theme::text_muted()}", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

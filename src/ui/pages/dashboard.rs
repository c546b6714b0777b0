use dioxus::prelude::*;

use crate::{app::Route, ui::theme};

struct Section {
    title: &'static str,
    description: &'static str,
    route: Route,
}

fn sections() -> [Section; 4] {
    [
        Section {
            title: "Заказы",
            description: "Заявки и цены с НДС и без НДС",
            route: Route::Orders {},
        },
        Section {
            title: "Правила распределения",
            description: "Назначение логистов, маржа и автопубликация",
            route: Route::DistributionRules {},
        },
        Section {
            title: "Логисты",
            description: "Сотрудники и их контакты",
            route: Route::Logists {},
        },
        Section {
            title: "Площадки",
            description: "Площадки для публикации грузов",
            route: Route::Platforms {},
        },
    ]
}

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        div { class: "space-y-4",
            h1 { class: "{theme::page_title()}", "Dashboard" }
            div { class: "card-grid",
                for Section { title, description, route } in sections() {
                    Link { class: "{theme::card()}", to: route,
                        h2 { "{title}" }
                        p { class: "{theme::text_muted()}", "{description}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    domain::DistributionRule,
    ui::{
        components::resource_table::{
            or_blank, or_dash, table_rows, yes_no, ResourceTable, TableLayout,
        },
        listing::use_listing,
    },
};

impl TableLayout for DistributionRule {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Площадка",
        "Город загрузки",
        "Город выгрузки",
        "Логист",
        "Маржа (обычные)",
        "Маржа (аукцион)",
        "Авто-публикация (обычные)",
        "Авто-публикация (аукцион)",
        "Задержка публикации (мин)",
        "Дней оплаты",
        "Наименование груза",
    ];

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_blank(self.platform.as_deref()),
            or_dash(self.loading_city.as_deref()),
            or_dash(self.unloading_city.as_deref()),
            self.logistician.clone(),
            or_blank(self.margin_percent),
            or_blank(self.auction_margin_percent),
            yes_no(self.auto_publish).to_string(),
            yes_no(self.auto_publish_auction).to_string(),
            or_blank(self.publish_delay),
            or_blank(self.payment_days),
            or_blank(self.cargo_name.as_deref()),
        ]
    }
}

#[component]
pub fn DistributionRulesPage() -> Element {
    let rules = use_listing::<DistributionRule>();
    let rows = rules.with(|state| table_rows(state.records()));

    rsx! {
        ResourceTable { title: "Правила распределения", columns: DistributionRule::COLUMNS, rows }
    }
}

use dioxus::prelude::*;

use crate::{
    domain::{format_price, price_excluding_tax, Order},
    ui::{
        components::resource_table::{table_rows, ResourceTable, TableLayout},
        listing::use_listing,
    },
};

impl TableLayout for Order {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Номер заказа",
        "Площадка",
        "Цена с НДС",
        "Цена без НДС",
    ];

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.external_no.clone(),
            self.platform.clone(),
            format_price(self.ati_price),
            format_price(self.ati_price.and_then(price_excluding_tax)),
        ]
    }
}

#[component]
pub fn OrdersPage() -> Element {
    let orders = use_listing::<Order>();
    let rows = orders.with(|state| table_rows(state.records()));

    rsx! {
        ResourceTable { title: "Заказы", columns: Order::COLUMNS, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, ati_price: Option<f64>) -> Order {
        Order {
            id,
            external_no: format!("Z-{id}"),
            platform: "ati".to_string(),
            ati_price,
        }
    }

    #[test]
    fn test_cells_include_pre_tax_price() {
        assert_eq!(
            order(1, Some(1250.0)).cells(),
            vec!["1", "Z-1", "ati", "1250", "1000"]
        );
    }

    #[test]
    fn test_missing_price_leaves_both_cells_empty() {
        let cells = order(2, None).cells();
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "");
    }

    #[test]
    fn test_cell_count_matches_columns() {
        assert_eq!(order(3, Some(0.0)).cells().len(), Order::COLUMNS.len());
    }
}

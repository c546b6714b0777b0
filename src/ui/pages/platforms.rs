use dioxus::prelude::*;

use crate::{
    domain::Platform,
    ui::{
        components::resource_table::{table_rows, yes_no, ResourceTable, TableLayout},
        listing::use_listing,
    },
};

impl TableLayout for Platform {
    const COLUMNS: &'static [&'static str] = &["ID", "Название", "Включена"];

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            yes_no(self.enabled).to_string(),
        ]
    }
}

#[component]
pub fn PlatformsPage() -> Element {
    let platforms = use_listing::<Platform>();
    let rows = platforms.with(|state| table_rows(state.records()));

    rsx! {
        ResourceTable { title: "Площадки", columns: Platform::COLUMNS, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_label() {
        let on = Platform {
            id: 1,
            name: "ATI".to_string(),
            enabled: true,
        };
        let off = Platform {
            enabled: false,
            ..on.clone()
        };
        assert_eq!(on.cells(), vec!["1", "ATI", "Да"]);
        assert_eq!(off.cells()[2], "Нет");
    }
}

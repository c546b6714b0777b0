use dioxus::prelude::*;

use crate::{
    domain::Logist,
    ui::{
        components::resource_table::{table_rows, ResourceTable, TableLayout},
        listing::use_listing,
    },
};

impl TableLayout for Logist {
    const COLUMNS: &'static [&'static str] = &["ID", "Имя", "Contact ID"];

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.contact_id.to_string(),
        ]
    }
}

#[component]
pub fn LogistsPage() -> Element {
    let logists = use_listing::<Logist>();
    let rows = logists.with(|state| table_rows(state.records()));

    rsx! {
        ResourceTable { title: "Логисты", columns: Logist::COLUMNS, rows }
    }
}

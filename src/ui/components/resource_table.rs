use std::fmt::Display;

use dioxus::prelude::*;

use crate::ui::theme;

/// Shown for optional text fields the server left empty.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Two-valued label for boolean columns.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Да"
    } else {
        "Нет"
    }
}

/// Missing or blank text renders as a dash.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

pub fn or_blank<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// How a record type is laid out as table columns.
pub trait TableLayout {
    const COLUMNS: &'static [&'static str];

    fn row_key(&self) -> String;

    /// One cell per entry in [`Self::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

/// One row per record, in the order given.
pub fn table_rows<R: TableLayout>(records: &[R]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow {
            key: record.row_key(),
            cells: record.cells(),
        })
        .collect()
}

#[component]
pub fn ResourceTable(
    title: &'static str,
    columns: &'static [&'static str],
    rows: Vec<TableRow>,
) -> Element {
    rsx! {
        div { class: "space-y-4",
            h1 { class: "{theme::page_title()}", "{title}" }
            div { class: "{theme::table_container()}",
                table { class: "{theme::table()}",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { class: "{theme::table_header()}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for TableRow { key, cells } in rows {
                            tr { key: "{key}", class: "{theme::table_row()}",
                                for cell in cells {
                                    td { class: "{theme::table_cell()}", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(u32, &'static str);

    impl TableLayout for Pair {
        const COLUMNS: &'static [&'static str] = &["ID", "Name"];

        fn row_key(&self) -> String {
            self.0.to_string()
        }

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let rows = table_rows(&[Pair(3, "c"), Pair(1, "a"), Pair(2, "b")]);
        assert_eq!(rows.len(), 3);
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
        assert_eq!(rows[1].cells, vec!["1".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_empty_records_give_no_rows() {
        assert!(table_rows::<Pair>(&[]).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(yes_no(true), "Да");
        assert_eq!(yes_no(false), "Нет");
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("")), "—");
        assert_eq!(or_dash(Some("Москва")), "Москва");
        assert_eq!(or_blank(Some(30)), "30");
        assert_eq!(or_blank::<i64>(None), "");
    }
}

//! Class names shared across pages. Rules live in `assets/main.css`.

pub fn page_title() -> &'static str {
    "page-title"
}

pub fn table_container() -> &'static str {
    "table-container"
}

pub fn table() -> &'static str {
    "data-table"
}

pub fn table_header() -> &'static str {
    "data-table__header"
}

pub fn table_row() -> &'static str {
    "data-table__row"
}

pub fn table_cell() -> &'static str {
    "data-table__cell"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}

pub fn card() -> &'static str {
    "card"
}

pub fn text_muted() -> &'static str {
    "text-muted"
}

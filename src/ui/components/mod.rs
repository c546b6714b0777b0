pub mod resource_table;
pub mod toast;

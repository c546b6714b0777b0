pub mod components;
pub mod listing;
pub mod pages;
pub mod shell;
pub mod theme;

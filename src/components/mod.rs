//! UI Components
//!
//! Leptos components for the table page.

mod header;
mod logos;
mod search_bar;
mod category_legend;
mod periodic_table;
mod element_tile;
mod detail_sheet;
mod slug_copy;
mod code_snippet;
mod resource_links;
mod log_panel;

pub use header::Header;
pub use logos::{CheckIcon, CopyIcon, MicrosoftLogo, TerraformLogo};
pub use search_bar::SearchBar;
pub use category_legend::CategoryLegend;
pub use periodic_table::PeriodicTable;
pub use element_tile::ElementTile;
pub use detail_sheet::DetailSheet;
pub use slug_copy::SlugCopy;
pub use code_snippet::CodeSnippet;
pub use resource_links::ResourceLinks;
pub use log_panel::LogPanel;

//! Shared UI components for the dashboard pages.

pub mod data_grid;
pub mod date_range;
pub mod layout;
pub mod nav;
pub mod report_panel;
pub mod theme;

pub use data_grid::DataGrid;
pub use date_range::DateRangeInputs;
pub use layout::{Layout, PageHead};
pub use nav::{Sidebar, TopBar};
pub use report_panel::{ErrorAlert, SheetLink};
pub use theme::ThemeToggle;

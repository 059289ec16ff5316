pub mod tui_adapter;

pub use tui_adapter::TuiAdapter;

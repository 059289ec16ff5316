pub mod error;

pub use lettercycle_app as app;
pub use lettercycle_domain as domain;
pub use lettercycle_infra as infra;
pub use lettercycle_ui as ui;

pub mod atoms;
pub mod footer;
pub mod header;
pub mod layout;
pub mod letter_panel;
pub mod status_message;

pub mod toggle_switch;

pub use toggle_switch::ToggleSwitch;

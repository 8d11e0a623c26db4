pub mod form;
pub mod pointer;
pub mod tabs;
pub mod window;

pub use form::ContactForm;
pub use pointer::{wire_hero_parallax, wire_spotlight, wire_tilt_cards, TiltCard};
pub use tabs::{wire_tab_groups, TabGroup};
pub use window::WindowEvents;

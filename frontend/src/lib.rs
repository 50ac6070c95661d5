pub mod config;
pub mod content;
pub mod counter;
pub mod dom;
pub mod error;
pub mod rotator;
pub mod timer;
pub mod validation;
pub mod components {
    pub mod appointment_form;
    pub mod appointment_modal;
    pub mod hero_slider;
    pub mod nav;
    pub mod service_cards;
    pub mod stats_counter;
}
pub mod pages {
    pub mod home;
}

//! Page copy and structure, loaded from `content/site.json`.
//!
//! Every section is optional: leaving it out (or empty) leaves the matching feature off.

use serde::Deserialize;

use crate::error::SiteError;

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub slides: Vec<Slide>,
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub appointment: Option<AppointmentCopy>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    /// Raw target as authored; see [`crate::counter::parse_target`].
    pub count: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Font Awesome icon class, e.g. `fa-heart-pulse`.
    pub icon: Option<String>,
    /// Service tag; only tagged cards pulse their icon on hover.
    pub service: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppointmentCopy {
    pub trigger_label: String,
    pub title: String,
    #[serde(default = "default_true")]
    pub show_close: bool,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default = "default_confirmation")]
    pub confirmation: String,
}

fn default_true() -> bool {
    true
}

fn default_submit_label() -> String {
    "Book Appointment".to_string()
}

fn default_confirmation() -> String {
    "Appointment request submitted successfully! We will contact you shortly.".to_string()
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The copy shipped with the build.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::parse(EMBEDDED)
    }
}

use log::Level;

use crate::popup::OverlayId;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-up, .design-img, .about-img, .industry-img";
pub const REVEALED_CLASS: &str = "visible";

pub const FALLBACK_TEXT: &str = "Imagem indisponível";
pub const FALLBACK_WIDTH: u32 = 800;
pub const FALLBACK_HEIGHT: u32 = 500;

/// Every overlay present on the page, registered at startup.
pub const OVERLAYS: [OverlayId; 2] = [OverlayId::Contact, OverlayId::Calculator];

/// Nav fragment that opens the contact overlay instead of scrolling.
pub const CONTACT_FRAGMENT: &str = "#contact";

pub const CANCEL_KEY: &str = "Escape";

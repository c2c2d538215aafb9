//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Viewport width (logical points) at or below which the nav collapses
/// into the hamburger menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Simulated network latency for the registration backend.
pub const SUBMIT_LATENCY_MS: u64 = 1500;

/// How long a success banner stays visible before auto-dismissing.
pub const SUCCESS_DISMISS_SECS: u64 = 5;

/// Set this to a URL to POST registrations to a real endpoint instead of
/// the simulated backend.
pub const REGISTER_ENDPOINT_ENV: &str = "DEMANDGENX_REGISTER_URL";

pub const SUBMIT_LABEL: &str = "Register Now";
pub const SUBMIT_LABEL_BUSY: &str = "Registering...";
pub const SUCCESS_MESSAGE: &str = "Registration successful! Welcome to DemandGenX.";
pub const FORM_INVALID_MESSAGE: &str = "Please fill in all required fields correctly.";

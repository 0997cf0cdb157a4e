//! Page components for Showreel.

mod portfolio;

pub use portfolio::Portfolio;

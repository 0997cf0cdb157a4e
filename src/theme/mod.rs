//! Visual theme for the portfolio window.

mod styles;

pub use styles::GLOBAL_STYLES;

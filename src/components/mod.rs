//! UI Components for the portfolio page.

mod about_section;
mod contact_section;
mod enhance_overlay;
mod hero;
pub mod media_picker;
mod nav_bar;
mod project_card;
mod work_section;

pub use about_section::AboutSection;
pub use contact_section::ContactSection;
pub use enhance_overlay::EnhanceOverlay;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use project_card::{AddProjectCard, ProjectCard};
pub use work_section::WorkSection;

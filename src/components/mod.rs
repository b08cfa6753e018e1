//! UI Components
//!
//! Leptos components of the contact page.

mod alert_banner;
mod contact_form;
mod contact_page;
mod fox_scene;
mod loader;

pub use alert_banner::AlertBanner;
pub use contact_form::ContactForm;
pub use contact_page::ContactPage;
pub use fox_scene::FoxScene;
pub use loader::Loader;

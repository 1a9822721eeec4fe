mod about;
mod content;
mod landing;
mod not_found;
mod progress_panel;
mod resource;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use landing::LandingView;
pub use not_found::{NotFoundPanel, NotFoundView};
pub use resource::ResourceView;
pub use state::{ViewError, ViewState, view_state_from_resource};

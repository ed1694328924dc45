mod controller;
mod input;
mod layout;
mod list_pane;
mod viewport;

pub use controller::Controller;
pub use list_pane::ListPane;
pub use viewport::Viewport;
#[cfg(test)]
pub use viewport::Direction;

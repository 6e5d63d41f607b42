pub mod booking_steps;
pub mod selection_panel;
pub mod skip_card;
pub mod skip_grid;
pub mod status;
pub mod theme_toggle;

pub use booking_steps::BookingSteps;
pub use selection_panel::SelectionPanel;
pub use skip_card::SkipCard;
pub use skip_grid::SkipGrid;
pub use status::{ErrorPage, Loading};
pub use theme_toggle::ThemeToggle;

pub mod competition_card;
pub mod distance_select;
pub mod error;
pub mod loading;
pub mod navbar;

// Re-export commonly used components
pub use competition_card::CompetitionCard;
pub use distance_select::DistanceSelect;
pub use error::ErrorView;
pub use loading::LoadingView;

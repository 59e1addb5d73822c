pub mod competitions;
pub mod documents;
pub mod home;
pub mod not_found;

mod home;
mod listing;
mod not_found;
mod tasks;

pub use home::Home;
pub use listing::Listing;
pub use not_found::NotFound;
pub use tasks::Tasks;

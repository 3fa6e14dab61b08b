pub mod package;

pub use package::TravelPackage;

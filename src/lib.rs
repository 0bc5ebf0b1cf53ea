pub mod airfoil;
pub mod convert;
pub mod dat;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod serialize;

pub use airfoil::normalize::normalize;
pub use airfoil::Airfoil;
pub use errors::Error;

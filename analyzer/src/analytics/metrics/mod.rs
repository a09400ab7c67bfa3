pub mod histogram;
pub mod losses;
pub mod phases;
pub mod summary;

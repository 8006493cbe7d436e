pub mod appointments;
pub mod landing;
pub mod schedule;

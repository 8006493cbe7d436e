mod appointment_repository;
mod brand_repository;
mod catalog_repository;
mod schedule_repository;

pub use appointment_repository::{AppointmentRepository, BookingOutcome};
pub use brand_repository::BrandRepository;
pub use catalog_repository::CatalogRepository;
pub use schedule_repository::ScheduleRepository;

//! Guest registry: business rules plus the two storage backends.

pub mod repository;
pub mod file;
pub mod seaorm;
pub mod service;

pub use repository::GuestRepository;
pub use service::GuestService;

pub mod genre;
pub mod movie;
pub mod person;

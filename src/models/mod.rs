pub mod booking;
pub mod tour;

pub mod use_admin;
pub mod use_barbers;
pub mod use_booking;

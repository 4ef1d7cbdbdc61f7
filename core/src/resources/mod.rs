//! One module per backend resource, each adding its operations to
//! `PetAdoptClient`.

mod admin;
mod adoptions;
mod auth;
mod blog;
mod bookings;
mod community;
mod pets;
mod surrenders;
mod users;

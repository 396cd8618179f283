pub mod errors;
pub mod db;
pub mod guest;
pub mod convidado;

pub use guest::{GuestEntry, Person};

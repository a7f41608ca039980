
pub mod connection;
pub use connection::Connection;

pub mod results;
pub use results::QueryError;

pub mod schema;

pub mod members;
pub mod trainers;
pub mod payments;
pub mod attendance;
pub mod bookings;
pub mod summary;

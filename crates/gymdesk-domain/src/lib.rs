
// Operations
mod operations;
pub use operations::*;

mod validation;
pub use validation::*;

pub mod datetime;

// Models
mod kinds;
pub use kinds::*;

mod members;
pub use members::*;

mod trainers;
pub use trainers::*;

mod payments;
pub use payments::*;

mod attendance;
pub use attendance::*;

mod bookings;
pub use bookings::*;

mod summary;
pub use summary::*;

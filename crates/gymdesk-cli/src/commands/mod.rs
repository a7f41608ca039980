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

use anyhow::Result;
use inquire::Confirm;

/// Ask before writing, unless confirmed on the command line
fn confirm(message: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirm = Confirm::new(message).with_default(true);
    Ok(confirm.prompt()?)
}

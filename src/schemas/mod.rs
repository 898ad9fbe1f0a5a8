//! Shapes exchanged with clients, mapped by hand from the entity models.

mod answer;
mod question;
mod test_result;

pub use answer::*;
pub use question::*;
pub use test::*;
pub use test_result::*;

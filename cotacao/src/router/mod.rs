pub mod funds;
pub mod quotes;
pub mod recommendations;
pub mod search;

pub mod util;

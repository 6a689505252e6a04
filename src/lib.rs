pub mod define;
pub mod utils;

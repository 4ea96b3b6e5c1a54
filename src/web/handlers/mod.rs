//! HTML template rendering handlers.

mod confirm;
mod home;
mod safelink;

pub use confirm::confirm_handler;
pub use home::home_handler;
pub use safelink::{
    safelink_final_handler, safelink_generate_handler, safelink_index_handler,
    safelink_step_handler,
};

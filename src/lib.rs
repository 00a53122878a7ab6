#![deny(warnings)]

pub mod angle;
pub mod batch;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod testing;
pub mod trig;

pub use angle::{convert, AngleUnit};
pub use trig::{deg_to_rad, rad_to_deg};

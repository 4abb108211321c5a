pub mod percent_utils;

pub use percent_utils::{format_percentage, percentage_of, round_percentage};

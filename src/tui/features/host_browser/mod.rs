//! Search box and host list.

mod filter;
mod input;
mod mouse;
mod render;

pub(crate) use filter::filter_hosts;

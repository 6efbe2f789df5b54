//! Add-host modal: form editing, submission, and drawing.

mod input;
mod mouse;
mod render;

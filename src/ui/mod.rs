pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod site;

pub use icon::{Icon, icons};
pub use reveal::{Reveal, RevealSection};
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};

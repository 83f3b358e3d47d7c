//! Common reusable UI components shared by the landing sections

pub mod link;

pub use link::{AccentHeadline, CtaLink, CtaSize, CtaVariant};

//! Application state: the slide data model and everything that owns it.
//!
//! - `slides`: the deck schema (six slide layouts)
//! - `deck`: the edit controller and image addressing
//! - `placement`: crop/zoom math shared with the overlay
//! - `store`: versioned on-disk persistence
//! - `defaults`: the built-in deck

pub mod deck;
pub mod defaults;
pub mod placement;
pub mod slides;
pub mod store;

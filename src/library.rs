//! Track records and the folder loader that produces them.
//!
//! `Track` lives in `library::model`; `scan` walks a music folder and
//! builds tracks from tags, falling back to the `Artist-Title.ext` naming
//! convention handled in `library::naming`.

mod model;
mod naming;
mod scan;

pub use model::Track;
pub use scan::scan;

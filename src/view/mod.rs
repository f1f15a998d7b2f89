//! Text renderings of the store state. Rendering never mutates anything.

pub mod detail;
pub mod list;

pub use detail::render_detail;
pub use list::render_list;

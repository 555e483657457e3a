pub mod alpha;
pub mod colormap;
pub mod diff;
pub mod threshold;

pub use alpha::render_alpha;
pub use colormap::DiffColormap;
pub use diff::{difference_map, render_diff};

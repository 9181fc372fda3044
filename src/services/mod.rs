//! Services: small pure helpers shared by the select and the picker.

mod util;

pub use util::circular_clamp;
pub use util::visible_window;

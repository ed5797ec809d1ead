pub mod avatar;
pub mod camera;
pub mod character;
pub mod selection;
pub mod ui;

pub use avatar::*;
pub use camera::*;
pub use character::*;
pub use selection::*;
pub use ui::*;

pub mod avatar_fx;
pub mod camera;
pub mod carousel;
pub mod input;
pub mod overlay;
pub mod setup;
pub mod splash;
pub mod transition;

pub use avatar_fx::*;
pub use camera::*;
pub use carousel::*;
pub use input::*;
pub use overlay::*;
pub use setup::*;
pub use splash::*;
pub use transition::*;

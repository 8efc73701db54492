pub mod desktop_window;
pub mod device;
pub mod drag;
pub mod focus;
pub mod fullscreen;
pub mod icons;
pub mod layout;
pub mod title_bar;
pub mod transform;

pub use desktop_window::*;
pub use device::*;
pub use focus::*;
pub use fullscreen::*;
pub use icons::*;
pub use title_bar::*;

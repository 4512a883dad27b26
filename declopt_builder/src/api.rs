mod binding;
mod capture;
mod core;
mod declaration;

pub use self::binding::*;
pub use self::capture::*;
pub use self::core::*;
pub use self::declaration::*;

mod coerce;
mod descriptor;
mod dispatch;
mod error;
mod interface;
mod middleware;
mod printer;
mod registry;
mod tokenize;

pub use self::coerce::{construct, enum_constant};
pub(crate) use self::coerce::coerce_list;
pub(crate) use self::descriptor::*;
pub(crate) use self::dispatch::*;
pub use self::error::*;
pub(crate) use self::interface::*;
pub use self::interface::UserInterface;
pub use self::middleware::OptionsParser;
pub(crate) use self::printer::*;
pub(crate) use self::registry::*;
pub use self::tokenize::tokenize;

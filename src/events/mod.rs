pub mod pointer;
pub mod scroll;

pub use pointer::{wire_pointer_handlers, PointerListeners};
pub use scroll::wire_hero_scroll;

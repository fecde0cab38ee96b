mod button;
pub use button::*;

pub mod select;

mod table;
pub use table::*;

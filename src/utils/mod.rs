mod class_name;
pub use class_name::*;

mod fragment;
pub use fragment::*;

mod pixels;
pub use pixels::*;

mod tokens;
pub(crate) use tokens::impl_named_token;

pub mod member_type;

pub use member_type::*;

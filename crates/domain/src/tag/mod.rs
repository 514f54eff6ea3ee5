pub mod aid;
mod tagset;
mod value;

pub use aid::{Aid, aid_by_name, aid_name};
pub use tagset::Tagset;
pub use value::Tag;

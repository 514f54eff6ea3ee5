//! Scripting layer - Lua binding for the tag library
//!
//! Exposes to Lua:
//! - the `tag` class: constructors, typed properties, `#`, `tostring`, `==`
//! - `emit(tbl)`: converts a table to a tagset and hands it to the host
//!
//! Decoding a tag as the wrong type yields nil. Key and value errors
//! during table conversion are raised to the calling script.

pub mod collector;
pub mod convert;
pub mod error;
pub mod lua_tag;

pub use collector::{EMIT_FN, install_collector, take_emitted};
pub use convert::{fill_tagset, table_to_tagset, value_to_aid, value_to_tag};
pub use error::BindError;
pub use lua_tag::{LuaTag, TAG_CLASS, push_tag, register_tag};

use mlua::Lua;

/// Install the whole binding (tag class and collector) into `lua`.
pub fn install(lua: &Lua) -> mlua::Result<()> {
    register_tag(lua)?;
    install_collector(lua)
}

use domain::Tag;
use mlua::{AnyUserData, Lua, MetaMethod, UserData, UserDataFields, UserDataMethods, Value};
use tracing::debug;

use crate::error::BindError;

/// Name of the global table holding the `tag` constructors
pub const TAG_CLASS: &str = "tag";

/// Lua-side `tag` object.
///
/// Properties read the content through one of the typed views and yield
/// nil when the bytes do not decode as that type. Assigning a property
/// replaces the content with the new encoding whatever it held before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LuaTag(pub Tag);

impl LuaTag {
    pub fn tag(&self) -> &Tag {
        &self.0
    }

}

impl From<Tag> for LuaTag {
    fn from(tag: Tag) -> Self {
        Self(tag)
    }
}

fn check_bool(value: Value) -> Result<bool, BindError> {
    match value {
        Value::Boolean(b) => Ok(b),
        other => Err(BindError::BadArgument {
            expected: "boolean",
            got: other.type_name(),
        }),
    }
}

/// Accept integers and floats holding an exact integer value.
fn check_integer(value: Value) -> Result<i64, BindError> {
    match value {
        Value::Integer(n) => Ok(n),
        // 2^63 is the first float past i64::MAX
        Value::Number(n)
            if n.fract() == 0.0 && n >= i64::MIN as f64 && n < 9_223_372_036_854_775_808.0 =>
        {
            Ok(n as i64)
        }
        other => Err(BindError::BadArgument {
            expected: "integer",
            got: other.type_name(),
        }),
    }
}

fn check_uint16(value: Value) -> Result<u16, BindError> {
    let n = check_integer(value)?;
    u16::try_from(n).map_err(|_| BindError::OutOfRange { value: n, target: "uint16" })
}

fn check_uint32(value: Value) -> Result<u32, BindError> {
    let n = check_integer(value)?;
    u32::try_from(n).map_err(|_| BindError::OutOfRange { value: n, target: "uint32" })
}

/// Lua integers carry uint64 as the same 64 bits.
fn check_uint64(value: Value) -> Result<u64, BindError> {
    Ok(check_integer(value)? as u64)
}

impl UserData for LuaTag {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        fields.add_field_method_get("hex", |_, this| Ok(this.0.to_hex()));
        fields.add_field_method_set("hex", |_, this, val: String| {
            this.0 = Tag::from_hex(&val).map_err(BindError::from)?;
            Ok(())
        });

        fields.add_field_method_get("base64", |_, this| Ok(this.0.to_base64()));
        fields.add_field_method_set("base64", |_, this, val: String| {
            this.0 = Tag::from_base64(&val).map_err(BindError::from)?;
            Ok(())
        });

        // Lua strings are byte strings, so this view never fails
        fields.add_field_method_get("string", |lua, this| lua.create_string(this.0.as_bytes()));
        fields.add_field_method_set("string", |_, this, val: mlua::String| {
            this.0 = Tag::new(val.as_bytes().to_vec());
            Ok(())
        });

        fields.add_field_method_get("bool", |_, this| Ok(this.0.bool()));
        fields.add_field_method_set("bool", |_, this, val: Value| {
            this.0 = Tag::from_bool(check_bool(val)?);
            Ok(())
        });

        fields.add_field_method_get("uint16", |_, this| Ok(this.0.uint16()));
        fields.add_field_method_set("uint16", |_, this, val: Value| {
            this.0 = Tag::from_uint16(check_uint16(val)?);
            Ok(())
        });

        fields.add_field_method_get("uint32", |_, this| Ok(this.0.uint32()));
        fields.add_field_method_set("uint32", |_, this, val: Value| {
            this.0 = Tag::from_uint32(check_uint32(val)?);
            Ok(())
        });

        fields.add_field_method_get("uint64", |_, this| Ok(this.0.uint64().map(|v| v as i64)));
        fields.add_field_method_set("uint64", |_, this, val: Value| {
            this.0 = Tag::from_uint64(check_uint64(val)?);
            Ok(())
        });

        fields.add_field_method_get("number", |_, this| Ok(this.0.number()));
        fields.add_field_method_set("number", |_, this, val: f64| {
            this.0 = Tag::from_number(val);
            Ok(())
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| Ok(this.0.to_hex()));
        methods.add_meta_method(MetaMethod::Len, |_, this, ()| Ok(this.0.len()));
        methods.add_meta_method(MetaMethod::Eq, |_, this, other: AnyUserData| {
            Ok(other
                .borrow::<LuaTag>()
                .map(|other| other.0 == this.0)
                .unwrap_or(false))
        });
        // unknown properties read as nil
        methods.add_meta_function(MetaMethod::Index, |_, (_, _): (AnyUserData, Value)| {
            Ok(Value::Nil)
        });
    }
}

/// Install the global `tag` table with its constructors.
pub fn register_tag(lua: &Lua) -> mlua::Result<()> {
    let class = lua.create_table()?;

    class.set(
        "newhex",
        lua.create_function(|lua, val: String| {
            push_tag(lua, Tag::from_hex(&val).map_err(BindError::from)?)
        })?,
    )?;
    class.set(
        "newbase64",
        lua.create_function(|lua, val: String| {
            push_tag(lua, Tag::from_base64(&val).map_err(BindError::from)?)
        })?,
    )?;
    class.set(
        "newstring",
        lua.create_function(|lua, val: mlua::String| push_tag(lua, Tag::new(val.as_bytes().to_vec())))?,
    )?;
    class.set(
        "newbool",
        lua.create_function(|lua, val: Value| push_tag(lua, Tag::from_bool(check_bool(val)?)))?,
    )?;
    class.set(
        "newuint16",
        lua.create_function(|lua, val: Value| push_tag(lua, Tag::from_uint16(check_uint16(val)?)))?,
    )?;
    class.set(
        "newuint32",
        lua.create_function(|lua, val: Value| push_tag(lua, Tag::from_uint32(check_uint32(val)?)))?,
    )?;
    class.set(
        "newuint64",
        lua.create_function(|lua, val: Value| push_tag(lua, Tag::from_uint64(check_uint64(val)?)))?,
    )?;
    class.set(
        "newnumber",
        lua.create_function(|lua, val: f64| push_tag(lua, Tag::from_number(val)))?,
    )?;

    lua.globals().set(TAG_CLASS, class)?;
    debug!(class = TAG_CLASS, "Registered tag class");
    Ok(())
}

/// Wrap a tag into a Lua userdata value.
pub fn push_tag(lua: &Lua, tag: Tag) -> mlua::Result<AnyUserData> {
    lua.create_userdata(LuaTag(tag))
}

use domain::tag::{Aid, aid_by_name};
use domain::{Tag, Tagset};
use mlua::{Table, Value};
use tracing::debug;

use crate::error::{BindError, Result};
use crate::lua_tag::LuaTag;

/// Convert a Lua value to an attribute identifier.
///
/// Numbers are cast to `u16` directly (integers wrap, floats saturate).
/// Strings must be one of the known aliases.
pub fn value_to_aid(key: &Value) -> Result<Aid> {
    match key {
        Value::Integer(n) => Ok(*n as Aid),
        Value::Number(n) => Ok(*n as Aid),
        Value::String(s) => {
            let name = String::from_utf8_lossy(&s.as_bytes()).into_owned();
            Ok(aid_by_name(&name)?)
        }
        _ => Err(BindError::BadKeyType),
    }
}

/// Coerce a Lua value into a tag.
///
/// Plain numbers are rejected: there is no way to tell which width
/// the caller meant.
pub fn value_to_tag(value: &Value) -> Result<Tag> {
    match value {
        Value::String(s) => Ok(Tag::new(s.as_bytes().to_vec())),
        Value::Boolean(b) => Ok(Tag::from_bool(*b)),
        Value::UserData(ud) => ud
            .borrow::<LuaTag>()
            .map(|tag| tag.tag().clone())
            .map_err(|_| BindError::BadValueType),
        _ => Err(BindError::BadValueType),
    }
}

/// Add every entry of `table` into `tagset`.
///
/// Stops at the first bad key or value; entries converted before that
/// point stay in `tagset`.
pub fn fill_tagset(tagset: &mut Tagset, table: &Table) -> Result<()> {
    for pair in table.pairs::<Value, Value>() {
        let (key, value) = pair?;
        let aid = value_to_aid(&key)?;
        let tag = value_to_tag(&value)?;
        tagset.put(aid, tag);
    }
    Ok(())
}

/// Convert a Lua table into a new tagset.
pub fn table_to_tagset(table: &Table) -> Result<Tagset> {
    let mut tagset = Tagset::new();
    fill_tagset(&mut tagset, table)?;
    debug!(tags = tagset.len(), "Converted table to tagset");
    Ok(tagset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;
    use domain::tag::aid;
    use mlua::Lua;

    #[test]
    fn test_numeric_keys() {
        assert_eq!(value_to_aid(&Value::Integer(10)).unwrap(), 10);
        assert_eq!(value_to_aid(&Value::Number(3.0)).unwrap(), 3);
        // integers wrap to the identifier width
        assert_eq!(value_to_aid(&Value::Integer(65_537)).unwrap(), 1);
    }

    #[test]
    fn test_string_keys() {
        let lua = Lua::new();
        let key = Value::String(lua.create_string("sha256").unwrap());
        assert_eq!(value_to_aid(&key).unwrap(), aid::SHA256);

        let key = Value::String(lua.create_string("nope").unwrap());
        assert!(matches!(
            value_to_aid(&key),
            Err(BindError::Domain(DomainError::KeyUndefined(name))) if name == "nope"
        ));
    }

    #[test]
    fn test_bad_key_type() {
        assert!(matches!(
            value_to_aid(&Value::Boolean(true)),
            Err(BindError::BadKeyType)
        ));
        assert!(matches!(value_to_aid(&Value::Nil), Err(BindError::BadKeyType)));
    }

    #[test]
    fn test_value_coercion() {
        let lua = Lua::new();
        let s = Value::String(lua.create_string("text/plain").unwrap());
        assert_eq!(value_to_tag(&s).unwrap(), Tag::from_string("text/plain"));
        assert_eq!(
            value_to_tag(&Value::Boolean(false)).unwrap(),
            Tag::from_bool(false)
        );

        let ud = lua.create_userdata(LuaTag(Tag::from_uint32(9))).unwrap();
        assert_eq!(
            value_to_tag(&Value::UserData(ud)).unwrap(),
            Tag::from_uint32(9)
        );
    }

    #[test]
    fn test_numbers_are_bad_values() {
        assert!(matches!(
            value_to_tag(&Value::Integer(1)),
            Err(BindError::BadValueType)
        ));
        assert!(matches!(
            value_to_tag(&Value::Number(1.5)),
            Err(BindError::BadValueType)
        ));
    }

    #[test]
    fn test_bad_value_message() {
        assert_eq!(
            BindError::BadValueType.to_string(),
            "tag value type is not string or boolean or 'tag' userdata"
        );
    }
}

use domain::Tagset;
use mlua::{Lua, Table};
use tracing::debug;

use crate::convert::table_to_tagset;

/// Name of the global function scripts use to hand tagsets to the host
pub const EMIT_FN: &str = "emit";

/// Tagsets emitted by the script, kept in the interpreter's app data.
#[derive(Debug, Default)]
struct EmittedTagsets(Vec<Tagset>);

/// Install the global `emit(tbl)` function.
///
/// Each call converts `tbl` to a tagset, stores it and returns the number
/// of tags it holds. Any previously collected tagsets are discarded.
pub fn install_collector(lua: &Lua) -> mlua::Result<()> {
    lua.set_app_data(EmittedTagsets::default());

    let emit = lua.create_function(|lua, table: Table| {
        let tagset = table_to_tagset(&table)?;
        let count = tagset.len();
        let mut emitted = lua
            .app_data_mut::<EmittedTagsets>()
            .ok_or_else(|| mlua::Error::runtime("tagset collector is not installed"))?;
        emitted.0.push(tagset);
        debug!(tags = count, total = emitted.0.len(), "Tagset emitted");
        Ok(count)
    })?;

    lua.globals().set(EMIT_FN, emit)?;
    Ok(())
}

/// Drain the tagsets emitted so far, in emission order.
pub fn take_emitted(lua: &Lua) -> Vec<Tagset> {
    lua.app_data_mut::<EmittedTagsets>()
        .map(|mut emitted| std::mem::take(&mut emitted.0))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_without_collector() {
        let lua = Lua::new();
        assert!(take_emitted(&lua).is_empty());
    }

    #[test]
    fn test_emit_collects_in_order() {
        let lua = Lua::new();
        install_collector(&lua).unwrap();
        lua.load(r#"emit({ name = "a" }); emit({ name = "b", mime = "text/plain" })"#)
            .exec()
            .unwrap();

        let emitted = take_emitted(&lua);
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].len(), 1);
        assert_eq!(emitted[1].len(), 2);

        // drained
        assert!(take_emitted(&lua).is_empty());
    }

    #[test]
    fn test_emit_returns_tag_count() {
        let lua = Lua::new();
        install_collector(&lua).unwrap();
        let count: usize = lua
            .load(r#"return emit({ name = "x", [100] = true })"#)
            .eval()
            .unwrap();
        assert_eq!(count, 2);
    }
}

use domain::DomainError;
use domain::tag::aid;
use domain::{Tag, Tagset};
use mlua::{Lua, Table};
use scripting::{BindError, fill_tagset, table_to_tagset};

fn lua_with_binding() -> Lua {
    let lua = Lua::new();
    scripting::install(&lua).expect("Should install binding");
    lua
}

fn table(lua: &Lua, src: &str) -> Table {
    lua.load(src).eval().expect("Should evaluate to a table")
}

#[test] // converts_named_and_numeric_keys
fn converts_named_and_numeric_keys() {
    let lua = lua_with_binding();
    let t = table(
        &lua,
        r#"return {
            name = "docs/readme.md",
            mime = "text/markdown",
            [200] = true,
            crc32 = tag.newuint32(3735928559),
        }"#,
    );

    let ts = table_to_tagset(&t).unwrap();
    assert_eq!(ts.len(), 4);
    assert_eq!(
        ts.get(aid::NAME).and_then(Tag::string),
        Some("docs/readme.md")
    );
    assert_eq!(ts.get(aid::MIME).and_then(Tag::string), Some("text/markdown"));
    assert_eq!(ts.get(200).and_then(Tag::bool), Some(true));
    assert_eq!(ts.get(aid::CRC32C).and_then(Tag::uint32), Some(0xdeadbeef));
}

#[test] // unknown_string_key_is_undefined
fn unknown_string_key_is_undefined() {
    let lua = lua_with_binding();
    let t = table(&lua, r#"return { filename = "a.txt" }"#);
    match table_to_tagset(&t) {
        Err(BindError::Domain(DomainError::KeyUndefined(key))) => assert_eq!(key, "filename"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test] // numeric_value_is_bad_value_type
fn numeric_value_is_bad_value_type() {
    let lua = lua_with_binding();
    let t = table(&lua, r#"return { name = 42 }"#);
    assert!(matches!(table_to_tagset(&t), Err(BindError::BadValueType)));
}

#[test] // table_value_is_bad_value_type
fn table_value_is_bad_value_type() {
    let lua = lua_with_binding();
    let t = table(&lua, r#"return { [1] = {} }"#);
    assert!(matches!(table_to_tagset(&t), Err(BindError::BadValueType)));
}

#[test] // bad_key_type
fn bad_key_type() {
    let lua = lua_with_binding();
    let t = table(&lua, r#"return { [true] = "x" }"#);
    assert!(matches!(table_to_tagset(&t), Err(BindError::BadKeyType)));
}

#[test] // failed_fill_keeps_converted_entries
fn failed_fill_keeps_converted_entries() {
    let lua = lua_with_binding();
    // array part is walked in index order: 1 and 2 convert before 3 fails
    let t = table(&lua, r#"return { "a", "b", 3 }"#);

    let mut ts = Tagset::new();
    ts.put(aid::AUTHOR, Tag::from_string("kept"));
    let result = fill_tagset(&mut ts, &t);

    assert!(matches!(result, Err(BindError::BadValueType)));
    assert!(ts.has(aid::AUTHOR));
    assert_eq!(ts.get(1).and_then(Tag::string), Some("a"));
    assert_eq!(ts.get(2).and_then(Tag::string), Some("b"));
    assert!(!ts.has(3));
}

#[test] // emit_raises_binding_errors_to_script
fn emit_raises_binding_errors_to_script() {
    let lua = lua_with_binding();
    let err = lua
        .load(r#"emit({ bogus = "x" })"#)
        .exec()
        .unwrap_err();
    assert!(err.to_string().contains("tag key 'bogus' is undefined"), "{}", err);

    let (ok, msg): (bool, String) = lua
        .load(
            r#"
            local ok, err = pcall(emit, { name = 1.5 })
            return ok, tostring(err)
            "#,
        )
        .eval()
        .unwrap();
    assert!(!ok);
    assert!(msg.contains("tag value type is not string or boolean"), "{}", msg);
}

#[test] // empty_table_gives_empty_tagset
fn empty_table_gives_empty_tagset() {
    let lua = lua_with_binding();
    let t = table(&lua, "return {}");
    assert!(table_to_tagset(&t).unwrap().is_empty());
}

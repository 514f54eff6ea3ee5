//! Script runner - executes Lua scripts with the tag binding installed
//! and hands the emitted tagsets to a sink.

use std::path::Path;

use anyhow::{Context, Result};
use domain::tag::aid_name;
use domain::{SinkError, Tagset, TagsetSink};
use mlua::Lua;
use tracing::{debug, info};

pub struct ScriptRunner {
    lua: Lua,
}

impl ScriptRunner {
    pub fn new() -> Result<Self> {
        let lua = Lua::new();
        scripting::install(&lua).context("Failed to install tag binding")?;
        Ok(Self { lua })
    }

    pub fn run_file(&self, path: &Path) -> Result<Vec<Tagset>> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {:?}", path))?;
        self.run_source(&path.display().to_string(), &source)
    }

    /// Execute `source` and drain the tagsets it emitted.
    pub fn run_source(&self, name: &str, source: &str) -> Result<Vec<Tagset>> {
        info!(script = %name, "📜 Running script");
        self.lua
            .load(source)
            .set_name(name)
            .exec()
            .with_context(|| format!("Script {} failed", name))?;

        let emitted = scripting::take_emitted(&self.lua);
        for (index, tagset) in emitted.iter().enumerate() {
            debug!(index, "Emitted {}", describe(tagset));
        }
        info!(count = emitted.len(), "✅ Script finished");
        Ok(emitted)
    }
}

/// One-line summary of a tagset, e.g. `name="a.txt" fid=01000000`.
///
/// Tags that read as printable text are quoted, anything else is hex.
pub fn describe(tagset: &Tagset) -> String {
    tagset
        .iter()
        .map(|(aid, tag)| {
            let key = aid_name(aid)
                .map(str::to_owned)
                .unwrap_or_else(|| aid.to_string());
            match tag.string() {
                Some(s) if !s.is_empty() && !s.chars().any(char::is_control) => {
                    format!("{}={:?}", key, s)
                }
                _ => format!("{}={}", key, tag),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn deliver(sink: &mut dyn TagsetSink, tagsets: &[Tagset]) -> Result<(), SinkError> {
    sink.write_all(tagsets)?;
    info!(count = tagsets.len(), "📦 Tagsets delivered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Tag;
    use domain::tag::aid;

    #[test]
    fn test_describe_mixes_text_and_hex() {
        let mut ts = Tagset::new();
        ts.put(aid::FID, Tag::from_uint32(1));
        ts.put(aid::NAME, Tag::from_string("a.txt"));
        ts.put(300, Tag::from_bool(true));
        assert_eq!(describe(&ts), r#"fid=01000000 name="a.txt" 300=01"#);
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&Tagset::new()), "");
    }
}

//! Loads the data files that are sent along with every question.

use anyhow::{Context as _, Result};
use insight_core::prompt::{ContextBlock, PromptContext};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads each file into a context block labelled with its file stem.
///
/// `.json` files are re-emitted as pretty JSON (which also validates them);
/// anything else is passed through as text.
pub fn load_context(paths: &[PathBuf]) -> Result<PromptContext> {
    let mut context = PromptContext::new();
    for path in paths {
        context.push(load_block(path)?);
    }
    Ok(context)
}

fn load_block(path: &Path) -> Result<ContextBlock> {
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_else(|| "data".to_string());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let block = if is_json {
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in context file {}", path.display()))?;
        ContextBlock::json(label, &value)?
    } else {
        ContextBlock::new(label, content.trim_end())
    };

    debug!(label = %block.label, bytes = block.data.len(), "Loaded context block");
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_json_and_text_blocks() {
        let dir = TempDir::new().unwrap();
        let json = temp_file(&dir, "employee_reviews.json", r#"[{"name":"Alice","score":4.8}]"#);
        let text = temp_file(&dir, "team-notes.txt", "Q3 targets met\n\n");

        let context = load_context(&[json, text]).unwrap();
        let blocks = context.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].label, "employee reviews");
        assert!(blocks[0].data.contains("\"name\": \"Alice\""));
        assert_eq!(blocks[1].label, "team notes");
        assert_eq!(blocks[1].data, "Q3 targets met");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let bad = temp_file(&dir, "broken.json", "{ nope");
        assert!(load_context(&[bad]).is_err());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(load_context(&[PathBuf::from("/definitely/not/here.json")]).is_err());
    }
}

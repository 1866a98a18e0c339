// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::options::ExportOptions;
use crate::error::ExportError;
use crate::specs::flyers::FlyerRecord;

/// Write all flyers as one pretty-printed JSON array at `export.out_path()`.
/// Returns the final path written to.
///
/// The whole document is rendered first and lands via rename, so the target
/// is either the complete new file or untouched.
pub fn write_flyers_json(
    export: &ExportOptions,
    flyers: &[FlyerRecord],
) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_json_bytes(flyers, export.indent)?;
    write_atomic(&path, &contents)?;
    Ok(path)
}

/// JSON with `indent` spaces per level. Non-ASCII text stays literal.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>, ExportError> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    Ok(out)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".part");
    let tmp = path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Writes `value` as pretty-printed JSON to `path`, or to stdout if `path` is `None`.
///
/// Missing parent directories are created.
pub fn write_json_file<T>(file_kind: &str, value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    let Some(path) = path else {
        return write_pretty_json(io::stdout().lock(), value)
            .with_context(|| format!("Failed to write {file_kind} JSON to stdout"));
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create {file_kind} file: {}", path.display()))?;
    write_pretty_json(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write {file_kind} file: {}", path.display()))
}

fn write_pretty_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

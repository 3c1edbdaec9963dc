use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::normalize::{num, temperature};
use crate::types::{Facility, Kind};

/// Build one facility's result row in schema order: the shared run
/// timestamp first, then every schema column looked up by its page label
/// and normalized. A label missing from the page yields `None`, which
/// serializes as an empty field.
pub fn build_row(
    facility: Facility,
    fields: &HashMap<String, String>,
    timestamp: &str,
) -> Vec<(&'static str, Option<String>)> {
    let columns = facility.columns();
    let mut row = Vec::with_capacity(columns.len() + 1);
    row.push(("date", Some(timestamp.to_string())));
    for column in columns {
        let raw = fields.get(column.label).map(String::as_str);
        let value = match column.kind {
            Kind::Count => num(raw),
            Kind::Temperature => temperature(raw),
        };
        row.push((column.name, value));
    }
    row
}

/// Append one row to the log at `path`, writing the header line first
/// when the file is missing or empty. The containing directory must
/// already exist.
pub async fn append_row(path: &Path, row: &[(&'static str, Option<String>)]) -> io::Result<()> {
    let mut text = String::new();
    if !has_content(path).await? {
        join_fields(&mut text, row.iter().map(|(name, _)| *name));
    }
    join_fields(
        &mut text,
        row.iter().map(|(_, value)| value.as_deref().unwrap_or("")),
    );

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;

    log::info!("Appended row to {}", path.display());
    Ok(())
}

/// Whether the file exists with non-zero size. `NotFound` counts as
/// empty; any other stat failure is fatal for this write.
async fn has_content(path: &Path) -> io::Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(meta.len() > 0),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn join_fields<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push('\t');
        }
        out.push_str(field);
    }
    out.push('\n');
}

//! Text report writer.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::scan::Sequence;

/// Maximum number of characters kept in a report label.
pub const LABEL_MAX_CHARS: usize = 10;

/// Derive the report label from a destination path.
///
/// Takes the final path component up to its first `.`, uppercases it and
/// keeps at most [`LABEL_MAX_CHARS`] characters.
///
/// # Example
/// ```
/// use hexpack::label_for_path;
///
/// assert_eq!(label_for_path("out/output.txt"), "OUTPUT");
/// assert_eq!(label_for_path("averylongfilename.txt"), "AVERYLONGF");
/// ```
pub fn label_for_path(path: impl AsRef<Path>) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    stem.to_uppercase().chars().take(LABEL_MAX_CHARS).collect()
}

/// Write a report to `out`: the label line followed by one
/// `\tdb <hex>,...;` line per row.
pub fn write_report<W: Write>(sequence: &Sequence, label: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "{label}")?;
    for row in sequence {
        writeln!(out, "\tdb {row};")?;
    }
    out.flush()
}

/// Render a report into a `String`.
pub fn render_report(sequence: &Sequence, label: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(sequence, label, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report for `sequence` to `path`, labelled after the file name.
///
/// The report is written to a uniquely named temporary file in the
/// destination's directory and then renamed over it, so the destination is
/// either fully replaced or left untouched. An existing destination is
/// overwritten and keeps its permissions. When `path` is a symlink the file
/// it points to is replaced and the link itself is left in place.
///
/// The label is always taken from `path`, not from a symlink target.
pub fn save_report(sequence: &Sequence, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let label = label_for_path(path);
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_report(sequence, &label, &mut writer)?;
    }
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;

    // Dropping the temp file on any earlier error removes it.
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Follow `path` through any chain of symlinks to the file that should be
/// replaced. A dangling link resolves to the path it names.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    // Same limit as Linux MAXSYMLINKS.
    for _ in 0..40 {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)?;
                target = match target.parent() {
                    Some(dir) if link.is_relative() => dir.join(link),
                    _ => link,
                };
            }
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(target),
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("too many levels of symbolic links: {}", path.display()),
    ))
}

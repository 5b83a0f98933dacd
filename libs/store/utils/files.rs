use std::io::Write;
use std::path::{Path, PathBuf};

use lazy_regex::Regex;

pub fn add_file_extension(path_buf: &mut PathBuf, extension: &str) {
    // Append the extension unless the path already carries it.
    match path_buf.extension() {
        Some(current_extension) if current_extension == extension => {}
        _ => {
            if let Some(stem) = path_buf.file_stem() {
                let new_name = format!("{}.{}", stem.to_string_lossy(), extension);
                path_buf.set_file_name(new_name);
            }
        }
    }
}

pub fn find_matching_files(path: &Path, re: &Regex) -> eyre::Result<Vec<String>> {
    let mut matching: Vec<String> = Vec::new();

    for entry in std::fs::read_dir(path)? {
        let file_path = entry?.path();

        if let Some(file_name) = file_path.file_name().and_then(|s| s.to_str()) {
            if re.is_match(file_name) {
                matching.push(file_name.to_string());
            }
        }
    }

    Ok(matching)
}

/// Write through a sibling temporary file and rename it into place so a
/// document is never observable half-written.
pub fn write_atomic(path: &Path, contents: &[u8]) -> eyre::Result<()> {
    let directory = path
        .parent()
        .ok_or_else(|| eyre::eyre!("document path '{}' has no parent directory", path.display()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(directory)?;
    temp_file.write_all(contents)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path)?;

    Ok(())
}

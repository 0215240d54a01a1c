//! Concatenation of per-page text files into one aggregate file

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Collects every `.txt` file below `root`, sorted by path
///
/// Symlinked directories are not descended into.
pub fn gather_text_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                pending.push(path);
            } else if path.extension().map_or(false, |ext| ext == "txt") {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Writes every text file of `input_dir` into `output_file`
///
/// Each file becomes a `# Source: <relative path>` header line, its content,
/// and a blank line. The output file is skipped when it lives inside
/// `input_dir`. Returns the number of files combined.
pub fn combine_texts(input_dir: &Path, output_file: &Path) -> io::Result<usize> {
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut destination = BufWriter::new(fs::File::create(output_file)?);
    let output_canonical = output_file.canonicalize()?;

    let mut count = 0;
    for text_file in gather_text_files(input_dir)? {
        if text_file.canonicalize()? == output_canonical {
            continue;
        }

        let relative = text_file.strip_prefix(input_dir).unwrap_or(&text_file);
        let content = fs::read_to_string(&text_file)?;
        tracing::debug!("adding {}", relative.display());

        writeln!(destination, "# Source: {}", display_relative(relative))?;
        destination.write_all(content.as_bytes())?;
        destination.write_all(b"\n\n")?;
        count += 1;
    }

    destination.flush()?;
    Ok(count)
}

// Forward slashes keep the header stable across platforms
fn display_relative(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

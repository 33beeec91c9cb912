use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use glob::glob;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Expands a glob pattern into the sorted list of matching files.
/// A plain path matches itself.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = glob(pattern)
        .with_context(|| format!("Invalid input pattern {}", pattern))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    if paths.is_empty() {
        bail!("No input files match {}", pattern);
    }
    Ok(paths)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a file for reading, decompressing `.gz` files on the fly.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// Reads a whole file (gzip-transparent) and decodes it as ISO-8859-1.
pub fn read_latin1<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    open_input(path)?
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(encoding_rs::mem::decode_latin1(&bytes).into_owned())
}

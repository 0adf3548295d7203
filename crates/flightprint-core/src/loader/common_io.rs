// crates/flightprint-core/src/loader/common_io.rs
use crate::error::{FlightprintError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FlightprintError::DataUnavailable(format!("dataset not found at {}: {e}", path.display()))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(FlightprintError::DataUnavailable(format!(
            "{} is gzipped but the `compact` feature is disabled",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `airports.json.gz` -> `airports.json.gz.bin`, next to the source.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// The cache is usable when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(cache)) {
        (Some(src), Some(bin)) => bin >= src,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/airports.json.gz"), "bin");
        assert_eq!(p, PathBuf::from("/data/airports.json.gz.bin"));
    }

    #[test]
    fn detects_gzip_by_extension() {
        assert!(is_gzip(Path::new("cities.json.GZ")));
        assert!(!is_gzip(Path::new("cities.json")));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err();
        assert!(matches!(err, Some(FlightprintError::DataUnavailable(_))));
    }

    #[test]
    fn missing_cache_is_never_fresh() {
        assert!(!is_cache_fresh(
            Path::new("/definitely/not/here.json"),
            Path::new("/definitely/not/here.json.bin")
        ));
    }
}

//! Output path helpers

use std::path::{Path, PathBuf};

use crate::error::CutResult;

/// Derive a per-segment output path by inserting `_{label}` before the file
/// extension of the base path (`video.mp4` + `segment_001` becomes
/// `video_segment_001.mp4`).
pub fn segment_output_path(base: &Path, label: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match base.extension() {
        Some(ext) => format!("{}_{}.{}", stem, label, ext.to_string_lossy()),
        None => format!("{}_{}", stem, label),
    };
    match base.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Create the parent directory of an output path if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> CutResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_inserted_before_extension() {
        let path = segment_output_path(Path::new("video.mp4"), "segment_001");
        assert_eq!(path, PathBuf::from("video_segment_001.mp4"));
    }

    #[test]
    fn parent_directory_is_preserved() {
        let path = segment_output_path(Path::new("/out/clips/video.mp4"), "scene_2");
        assert_eq!(path, PathBuf::from("/out/clips/video_scene_2.mp4"));
    }

    #[test]
    fn extensionless_base_appends_label() {
        let path = segment_output_path(Path::new("video"), "segment_001");
        assert_eq!(path, PathBuf::from("video_segment_001"));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b").join("out.mp4");
        ensure_parent_dir(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
    }
}

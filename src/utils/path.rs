//! Output path derivation and collision avoidance

use std::path::{Path, PathBuf};

use crate::domain::model::OutputFormat;

/// Lower-cased extension of a path, without the dot
pub fn lower_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Default output file next to the input: `movie.pbf`, `movie.xml`,
/// or `movie.<format>.txt` for the text formats
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.with_extension("");
    let suffix = match format {
        OutputFormat::Pot => "pbf".to_string(),
        OutputFormat::Xml => "xml".to_string(),
        other => format!("{}.txt", other),
    };
    append_extension(&stem, &suffix)
}

/// First of `path`, `stem (2).ext`, `stem (3).ext`, ... that `exists`
/// reports as free
pub fn avoid_collision(path: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    if !exists(path) {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    (2u64..)
        .map(|i| path.with_file_name(format!("{} ({}){}", stem, i, ext)))
        .find(|candidate| !exists(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_output_path() {
        let input = Path::new("videos/movie.mkv");
        assert_eq!(
            default_output_path(input, OutputFormat::Pot),
            PathBuf::from("videos/movie.pbf")
        );
        assert_eq!(
            default_output_path(input, OutputFormat::Xml),
            PathBuf::from("videos/movie.xml")
        );
        assert_eq!(
            default_output_path(input, OutputFormat::Ogm),
            PathBuf::from("videos/movie.ogm.txt")
        );
        assert_eq!(
            default_output_path(input, OutputFormat::Tab),
            PathBuf::from("videos/movie.tab.txt")
        );
    }

    #[test]
    fn test_default_output_path_only_strips_last_extension() {
        assert_eq!(
            default_output_path(Path::new("movie.chapters.txt"), OutputFormat::Simple),
            PathBuf::from("movie.chapters.simple.txt")
        );
    }

    #[test]
    fn test_avoid_collision_free_path() {
        let path = Path::new("out.pbf");
        assert_eq!(avoid_collision(path, |_| false), PathBuf::from("out.pbf"));
    }

    #[test]
    fn test_avoid_collision_counts_from_two() {
        let taken: HashSet<PathBuf> = ["dir/out.ogm.txt", "dir/out.ogm (2).txt"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(
            avoid_collision(Path::new("dir/out.ogm.txt"), |p| taken.contains(p)),
            PathBuf::from("dir/out.ogm (3).txt")
        );
    }

    #[test]
    fn test_avoid_collision_without_extension() {
        let taken: HashSet<PathBuf> = [PathBuf::from("chapters")].into_iter().collect();
        assert_eq!(
            avoid_collision(Path::new("chapters"), |p| taken.contains(p)),
            PathBuf::from("chapters (2)")
        );
    }

    #[test]
    fn test_lower_extension() {
        assert_eq!(lower_extension(Path::new("a.MKV")), Some("mkv".to_string()));
        assert_eq!(lower_extension(Path::new("a")), None);
    }
}

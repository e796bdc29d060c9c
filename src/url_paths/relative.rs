/// Compute the POSIX relative path leading from directory `from_dir` to `to_path`.
///
/// Both operands are normalised first: empty and `.` segments are dropped and `..` removes the
/// preceding segment, stopping at the root. Leading segments shared by both paths are then
/// eliminated, one `..` is emitted for every segment left in `from_dir`, followed by the
/// remaining segments of `to_path`. Identical paths produce an empty string.
///
/// Separators are always `/` regardless of the host platform, and each ascent is its own
/// `..` segment.
pub fn relative_path(from_dir: &str, to_path: &str) -> String {
    let from = normalise_segments(from_dir);
    let to = normalise_segments(to_path);

    let shared = from
        .iter()
        .zip(to.iter())
        .take_while(|(left, right)| left == right)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - shared];
    parts.extend_from_slice(&to[shared..]);
    parts.join("/")
}

fn normalise_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments
}

//! Link target classification by file extension.
//!
//! Only the extension is consulted. Link targets are never opened, so
//! extensionless or unknown targets are classified as non-images.

use crate::path::split_extension;
use mime_guess::mime;

/// Content encodings that wrap another file type (`logo.svg.gz`).
const COMPRESSION_SUFFIXES: [&str; 5] = [".gz", ".Z", ".bz2", ".xz", ".br"];

/// Returns true when the link target names an image.
///
/// Guesses the MIME type from the extension and checks that its top
/// level type is `image`. Extension matching is case insensitive. One
/// trailing compression suffix is skipped, so `diagram.svg.gz` is an image.
///
/// # Examples
///
/// ```
/// use relink::is_path_image;
///
/// assert!(is_path_image("assets/logo.png"));
/// assert!(!is_path_image("guide.html"));
/// assert!(!is_path_image("LICENSE"));
/// ```
pub fn is_path_image(path: &str) -> bool {
    mime_guess::from_path(strip_compression(path))
        .first()
        .is_some_and(|guess| guess.type_() == mime::IMAGE)
}

fn strip_compression(path: &str) -> &str {
    let (stem, ext) = split_extension(path);
    if COMPRESSION_SUFFIXES
        .iter()
        .any(|suffix| suffix.eq_ignore_ascii_case(ext))
    {
        stem
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_images() {
        assert!(is_path_image("photo.png"));
        assert!(is_path_image("photo.jpg"));
        assert!(is_path_image("photo.jpeg"));
        assert!(is_path_image("anim.gif"));
        assert!(is_path_image("pics/a.webp"));
        assert!(is_path_image("favicon.ico"));
    }

    #[test]
    fn test_vector_image() {
        assert!(is_path_image("diagrams/flow.svg"));
    }

    #[test]
    fn test_compressed_images() {
        assert!(is_path_image("diagram.svg.gz"));
        assert!(is_path_image("img/photo.png.gz"));
        assert!(is_path_image("scan.tiff.bz2"));
        assert!(is_path_image("photo.jpg.GZ"));
    }

    #[test]
    fn test_compressed_non_images() {
        assert!(!is_path_image("archive.tar.gz"));
        assert!(!is_path_image("notes.txt.xz"));
        assert!(!is_path_image("bundle.gz"));
    }

    #[test]
    fn test_only_one_compression_suffix_skipped() {
        assert!(!is_path_image("photo.png.gz.gz"));
    }

    #[test]
    fn test_uppercase_extension() {
        assert!(is_path_image("PHOTO.PNG"));
    }

    #[test]
    fn test_documents_are_not_images() {
        assert!(!is_path_image("page.html"));
        assert!(!is_path_image("readme.md"));
        assert!(!is_path_image("notes.txt"));
        assert!(!is_path_image("styles.css"));
    }

    #[test]
    fn test_unknown_targets_are_not_images() {
        assert!(!is_path_image("noext"));
        assert!(!is_path_image("dir/"));
        assert!(!is_path_image("file.unknownext"));
        assert!(!is_path_image(""));
    }
}

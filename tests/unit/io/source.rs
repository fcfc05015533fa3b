//! Tests for source image ordering and directory loading

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use masonrycollage::io::progress::ProgressManager;
    use masonrycollage::io::source::{
        OrderedImages, SourceImage, collect_image_paths, is_image_file, load_directory,
        load_source_image,
    };
    use masonrycollage::layout::sizing::ImageDimensions;
    use std::fs;
    use std::path::Path;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::new(width, height).save(dir.join(name)).unwrap();
    }

    // Tests images are sorted once by identifier
    // Verified by keeping insertion order
    #[test]
    fn test_ordered_images_sort_by_id() {
        let images = OrderedImages::new(vec![
            SourceImage::new("c.png", RgbaImage::new(3, 1)),
            SourceImage::new("a.png", RgbaImage::new(1, 1)),
            SourceImage::new("b.png", RgbaImage::new(2, 1)),
        ]);

        let ids: Vec<&str> = images.iter().map(SourceImage::id).collect();
        assert_eq!(ids, vec!["a.png", "b.png", "c.png"]);
        assert_eq!(
            images.dimensions(),
            vec![
                ImageDimensions::new(1, 1),
                ImageDimensions::new(2, 1),
                ImageDimensions::new(3, 1)
            ]
        );
        assert_eq!(images.len(), 3);
        assert_eq!((&images).into_iter().count(), 3);
    }

    // Tests extension matching ignores case and rejects others
    // Verified by matching case-sensitively
    #[test]
    fn test_is_image_file() {
        for name in ["a.png", "b.JPG", "c.jpeg", "d.Bmp", "e.gif"] {
            assert!(is_image_file(Path::new(name)), "{name}");
        }
        for name in ["notes.txt", "archive.png.zip", "noext", "f.webp"] {
            assert!(!is_image_file(Path::new(name)), "{name}");
        }
    }

    // Tests directory listing filters by extension and sorts
    // Verified by returning directory order
    #[test]
    fn test_collect_image_paths() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 2, 2);
        write_png(dir.path(), "a.png", 2, 2);
        fs::write(dir.path().join("readme.txt"), "not an image").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = collect_image_paths(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    // Tests a missing input directory is an error
    // Verified by returning an empty list
    #[test]
    fn test_collect_image_paths_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_image_paths(&dir.path().join("absent")).is_err());
    }

    // Tests the file name becomes the identifier
    // Verified by using the full path as identifier
    #[test]
    fn test_load_source_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "shoe.png", 5, 7);

        let image = load_source_image(&dir.path().join("shoe.png")).unwrap();
        assert_eq!(image.id(), "shoe.png");
        assert_eq!(image.dimensions(), ImageDimensions::new(5, 7));
    }

    // Tests an undecodable file is skipped without failing the batch
    // Verified by propagating the decode error
    #[test]
    fn test_load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 4, 4);
        write_png(dir.path(), "a.png", 3, 3);
        fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

        let progress = ProgressManager::hidden();
        let images = load_directory(dir.path(), &progress).unwrap();

        let ids: Vec<&str> = images.iter().map(SourceImage::id).collect();
        assert_eq!(ids, vec!["a.png", "b.png"]);
        assert_eq!(progress.position(), 3);
    }

    // Tests an empty directory loads no images
    // Verified by failing on empty input
    #[test]
    fn test_load_directory_empty() {
        let dir = tempfile::tempdir().unwrap();
        let images = load_directory(dir.path(), &ProgressManager::hidden()).unwrap();
        assert!(images.is_empty());
    }
}

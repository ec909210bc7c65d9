use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::{fs, io};

use image::GenericImageView;
use spdlog::{error, info};

use crate::config::Gallery;

const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

pub fn is_image_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Sorted image file names in `dir`, thumbnails excluded
pub fn image_files(dir: &Path, thumb_prefix: &str) -> io::Result<Vec<String>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        if is_image_file(&file_name) && !file_name.starts_with(thumb_prefix) {
            files.push(file_name);
        }
    }
    files.sort();
    Ok(files)
}

pub fn thumb_name(thumb_prefix: &str, file_name: &str) -> String {
    format!("{}{}", thumb_prefix, file_name)
}

/// Shrinks `src` to fit in a `size` x `size` box. Smaller images are saved unscaled.
pub fn make_thumbnail(src: &Path, dst: &Path, size: u32) -> image::ImageResult<()> {
    let img = image::open(src)?;
    let (width, height) = img.dimensions();
    if width <= size && height <= size {
        return img.save(dst);
    }
    img.thumbnail(size, size).save(dst)
}

/// Creates missing thumbnails and returns their paths.
/// Images that fail to decode or encode are logged and skipped.
pub fn generate_thumbnails(dir: &Path, cfg: &Gallery) -> io::Result<Vec<PathBuf>> {
    let mut generated = vec![];

    for file_name in image_files(dir, &cfg.thumb_prefix)? {
        let thumb_path = dir.join(thumb_name(&cfg.thumb_prefix, &file_name));
        if thumb_path.exists() {
            continue;
        }

        match make_thumbnail(&dir.join(&file_name), &thumb_path, cfg.thumb_size) {
            Ok(()) => {
                info!("Generated thumbnail: {}", thumb_path.display());
                generated.push(thumb_path);
            }
            Err(e) => error!("Failed to generate thumbnail for {}: {}", file_name, e),
        }
    }

    Ok(generated)
}

fn join_url(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        return file_name.to_string();
    }
    format!("{}/{}", dir, file_name)
}

/// GLightbox anchors for each image, one block per file
pub fn gallery_markup(dir: &str, files: &[String], cfg: &Gallery) -> String {
    let dir = dir.trim_end_matches('/');
    let mut blocks = vec![];

    for file_name in files {
        let base_name = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let thumb = thumb_name(&cfg.thumb_prefix, file_name);

        let mut buf = String::new();
        let _ = writeln!(&mut buf, "<a href=\"{}\" class=\"glightbox\" ", join_url(dir, file_name));
        let _ = writeln!(&mut buf, " \tdata-glightbox=\"descPosition: right;\"");
        let _ = writeln!(&mut buf, "\tdata-gallery=\"{}\" ", cfg.gallery_name);
        let _ = writeln!(&mut buf, "\tdata-title=\"\" ");
        let _ = writeln!(&mut buf, "\tdata-description=\"\">");
        let _ = writeln!(&mut buf, "\t\t<img src=\"{}\" alt=\"{}\">", join_url(dir, &thumb), base_name);
        let _ = write!(&mut buf, "</a>");
        blocks.push(buf);
    }

    blocks.join("\n")
}

/// Thumbnails first, then the markup for everything in `dir`
pub fn build_gallery(dir: &str, cfg: &Gallery) -> io::Result<String> {
    let path = Path::new(dir);
    generate_thumbnails(path, cfg)?;
    let files = image_files(path, &cfg.thumb_prefix)?;
    Ok(gallery_markup(dir, &files, cfg))
}

#[cfg(test)]
mod tests {
    use image::RgbImage;

    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("a.jpg"));
        assert!(is_image_file("B.JPEG"));
        assert!(is_image_file("c.Png"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("jpg"));
    }

    #[test]
    fn test_image_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "thumba.jpg", "readme.md", "C.JPEG"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let files = image_files(dir.path(), "thumb").unwrap();
        assert_eq!(files, vec!["C.JPEG", "a.jpg", "b.png"]);
    }

    #[test]
    fn test_gallery_markup() {
        let cfg = Gallery::default();
        let files = vec!["a.jpg".to_string(), "b.png".to_string()];
        let markup = gallery_markup("../img/trip/", &files, &cfg);

        let expected = concat!(
            "<a href=\"../img/trip/a.jpg\" class=\"glightbox\" \n",
            " \tdata-glightbox=\"descPosition: right;\"\n",
            "\tdata-gallery=\"mygallery\" \n",
            "\tdata-title=\"\" \n",
            "\tdata-description=\"\">\n",
            "\t\t<img src=\"../img/trip/thumba.jpg\" alt=\"a\">\n",
            "</a>\n",
            "<a href=\"../img/trip/b.png\" class=\"glightbox\" \n",
            " \tdata-glightbox=\"descPosition: right;\"\n",
            "\tdata-gallery=\"mygallery\" \n",
            "\tdata-title=\"\" \n",
            "\tdata-description=\"\">\n",
            "\t\t<img src=\"../img/trip/thumbb.png\" alt=\"b\">\n",
            "</a>",
        );
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_gallery_markup_empty() {
        assert_eq!(gallery_markup("img", &[], &Gallery::default()), "");
    }

    #[test]
    fn test_generate_thumbnails() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(512, 300).save(dir.path().join("wide.png")).unwrap();
        RgbImage::new(100, 50).save(dir.path().join("small.png")).unwrap();
        fs::write(dir.path().join("broken.jpg"), "not an image").unwrap();

        let cfg = Gallery::default();
        let generated = generate_thumbnails(dir.path(), &cfg).unwrap();
        assert_eq!(generated.len(), 2);

        let (w, h) = image::image_dimensions(dir.path().join("thumbwide.png")).unwrap();
        assert_eq!(w.max(h), 256);
        assert!(w <= 256 && h <= 256);
        assert_eq!(image::image_dimensions(dir.path().join("thumbsmall.png")).unwrap(), (100, 50));
        assert!(!dir.path().join("thumbbroken.jpg").exists());

        // Existing thumbnails are left alone
        let generated = generate_thumbnails(dir.path(), &cfg).unwrap();
        assert!(generated.is_empty());
    }

    #[test]
    fn test_build_gallery() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(20, 20).save(dir.path().join("one.png")).unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let markup = build_gallery(dir_str, &Gallery::default()).unwrap();
        assert!(dir.path().join("thumbone.png").exists());
        assert!(markup.contains(&format!("<img src=\"{}/thumbone.png\" alt=\"one\">", dir_str)));
        assert_eq!(markup.matches("<a href=").count(), 1);
    }
}

use crate::error::ScrapeError;
use crate::models::Snowboard;
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes product images to
/// `<root>/images/<brand>/<season>/<name>/<brand>_<season>_<name><ext>`.
///
/// Brand, season and name are page or config text; each is reduced to a
/// single path component that cannot leave its parent directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dir_for(&self, board: &Snowboard) -> PathBuf {
        self.root
            .join("images")
            .join(path_component(&board.brand_name))
            .join(path_component(&board.season))
            .join(path_component(&board.name))
    }

    pub fn file_name(board: &Snowboard, image_url: &str) -> String {
        format!(
            "{}_{}_{}{}",
            path_component(&board.brand_name),
            path_component(&board.season),
            path_component(&board.name),
            url_extension(image_url)
        )
    }

    pub fn path_for(&self, board: &Snowboard, image_url: &str) -> PathBuf {
        self.dir_for(board).join(Self::file_name(board, image_url))
    }

    /// Creates the product directory if needed and writes `bytes` into it,
    /// replacing any earlier download.
    pub fn save(&self, board: &Snowboard, image_url: &str, bytes: &[u8]) -> Result<PathBuf, ScrapeError> {
        let dir = self.dir_for(board);
        fs::create_dir_all(&dir).map_err(|source| ScrapeError::ImageWrite {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(Self::file_name(board, image_url));
        fs::write(&path, bytes).map_err(|source| ScrapeError::ImageWrite {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Separators and NUL become `_`; empty, `.` and `..` become `_`.
fn path_component(text: &str) -> String {
    let component: String = text
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    match component.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => component,
    }
}

/// Extension of the URL path including the leading dot, or empty.
fn url_extension(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    };

    Path::new(&path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Snowboard {
        Snowboard {
            name: "Antigravity".to_string(),
            ..Snowboard::with_defaults("Gnu", "W2023_2024", "MEN")
        }
    }

    #[test]
    fn extension_comes_from_url_path() {
        assert_eq!(url_extension("https://cdn.example.com/media/board.png"), ".png");
        assert_eq!(url_extension("https://cdn.example.com/media/board.jpg?width=800"), ".jpg");
        assert_eq!(url_extension("https://cdn.example.com/media/board"), "");
        assert_eq!(url_extension("/media/board.webp?x=1"), ".webp");
    }

    #[test]
    fn path_is_derived_from_record() {
        let store = ImageStore::new("/data");

        assert_eq!(
            store.path_for(&board(), "https://cdn.example.com/a.png"),
            PathBuf::from("/data/images/Gnu/W2023_2024/Antigravity/Gnu_W2023_2024_Antigravity.png")
        );
    }

    #[test]
    fn unsafe_record_text_stays_inside_images() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());

        let dotted = Snowboard {
            name: "..".to_string(),
            ..Snowboard::with_defaults("Gnu", ".", "MEN")
        };
        let path = store.save(&dotted, "https://cdn.example.com/a.png", b"img").unwrap();
        assert_eq!(path, tmp.path().join("images/Gnu/_/_/Gnu____.png"));
        assert!(path.starts_with(tmp.path().join("images")));

        let slashed = Snowboard {
            name: "Ladies Choice / C2".to_string(),
            ..Snowboard::with_defaults("Gnu", "W2023_2024", "WOMEN")
        };
        let path = store.save(&slashed, "https://cdn.example.com/a.png", b"img").unwrap();
        assert_eq!(
            path,
            tmp.path()
                .join("images/Gnu/W2023_2024/Ladies Choice _ C2/Gnu_W2023_2024_Ladies Choice _ C2.png")
        );
        assert_eq!(fs::read(path).unwrap(), b"img");
    }

    #[test]
    fn components_are_sanitized() {
        assert_eq!(path_component("Antigravity"), "Antigravity");
        assert_eq!(path_component("a/b\\c\0d"), "a_b_c_d");
        assert_eq!(path_component(""), "_");
        assert_eq!(path_component("."), "_");
        assert_eq!(path_component(".."), "_");
        assert_eq!(path_component("..."), "...");
    }

    #[test]
    fn save_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());

        let first = store.save(&board(), "https://cdn.example.com/a.png", b"one").unwrap();
        let second = store.save(&board(), "https://cdn.example.com/a.png", b"two").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), b"two");
    }
}

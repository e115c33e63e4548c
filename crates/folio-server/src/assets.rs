//! Streaming image assets from disk.

use std::io;
use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Content type sent for every asset, whatever the image subtype.
pub const ASSET_CONTENT_TYPE: &str = "image/jpeg";

/// Body of the 404 response for any asset that cannot be opened.
pub const NOT_FOUND_BODY: &str = "Image not found";

/// Map a URL path onto a file under `base_dir`.
///
/// Returns `None` for paths that would leave `base_dir` (any `..` component)
/// or that name no file at all.
pub fn resolve_asset(base_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = Path::new(url_path.trim_start_matches('/'));

    let mut resolved = base_dir.to_path_buf();
    let mut depth = 0usize;
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    (depth > 0).then_some(resolved)
}

/// Respond to an asset request.
///
/// Every failure (bad path, missing file, directory, permission error)
/// collapses into the same 404.
pub async fn asset_response(base_dir: &Path, url_path: &str) -> Response {
    let Some(path) = resolve_asset(base_dir, url_path) else {
        tracing::debug!(path = url_path, "Rejected asset path");
        return not_found();
    };

    match open_regular_file(&path).await {
        Ok(file) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, ASSET_CONTENT_TYPE)],
            Body::from_stream(ReaderStream::new(file)),
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Asset not found");
            not_found()
        }
    }
}

async fn open_regular_file(path: &Path) -> io::Result<File> {
    let file = File::open(path).await?;

    if !file.metadata().await?.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
    }

    Ok(file)
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::tempdir;

    async fn body_bytes(response: Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[test]
    fn resolves_under_base_dir() {
        let base = Path::new("/srv/site");

        assert_eq!(
            resolve_asset(base, "/profilepic.jpg"),
            Some(PathBuf::from("/srv/site/profilepic.jpg"))
        );
        assert_eq!(
            resolve_asset(base, "/img/./a.png"),
            Some(PathBuf::from("/srv/site/img/a.png"))
        );
    }

    #[test]
    fn rejects_traversal() {
        let base = Path::new("/srv/site");

        assert_eq!(resolve_asset(base, "/../etc/secret.png"), None);
        assert_eq!(resolve_asset(base, "/img/../../x.jpg"), None);
        assert_eq!(resolve_asset(base, "/"), None);
    }

    #[tokio::test]
    async fn streams_existing_file() {
        let temp = tempdir().unwrap();
        let bytes: Vec<u8> = (0..=255u8).cycle().take(100_000).collect();
        fs::write(temp.path().join("photo.png"), &bytes).unwrap();

        let response = asset_response(temp.path(), "/photo.png").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], ASSET_CONTENT_TYPE);
        assert_eq!(body_bytes(response).await, bytes);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp = tempdir().unwrap();

        let response = asset_response(temp.path(), "/missing.png").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, NOT_FOUND_BODY.as_bytes());
    }

    #[tokio::test]
    async fn directory_is_not_found() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("album.jpg")).unwrap();

        let response = asset_response(temp.path(), "/album.jpg").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

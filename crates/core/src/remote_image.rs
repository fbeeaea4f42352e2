use std::borrow::Cow;

/// Append the image service's quality suffix to a remote image URL.
///
/// Only URLs starting with `http` are touched, and only when `quality` is
/// nonzero. The suffix `quality,q_<n>` is appended verbatim; the caller is
/// responsible for the URL already ending in the service's processing
/// parameter (e.g. `?x-oss-process=image/`).
pub fn transform_remote_image_url(url: &str, quality: u32) -> Cow<'_, str> {
    if !url.starts_with("http") || quality == 0 {
        return Cow::Borrowed(url);
    }
    Cow::Owned(format!("{url}quality,q_{quality}"))
}

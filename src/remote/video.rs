// SPDX-License-Identifier: MIT

//! Client-side video helpers for the workout catalog.
//!
//! Workout records carry a video URL; thumbnails are derived locally by
//! recognizing the known video-host URL shapes, no network call involved.

/// Length of a video host id.
const VIDEO_ID_LEN: usize = 11;

/// Path markers preceding the video id in supported URL shapes.
const URL_MARKERS: [&str; 4] = [
    "youtu.be/",
    "youtube.com/watch?v=",
    "youtube.com/embed/",
    "youtube.com/v/",
];

/// Extract the 11-character video id from a supported video URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    for marker in URL_MARKERS {
        if let Some(pos) = url.find(marker) {
            let rest = &url[pos + marker.len()..];
            // Remote-supplied URLs may hold multi-byte text right after the
            // marker; only slice on a char boundary.
            if rest.len() < VIDEO_ID_LEN || !rest.is_char_boundary(VIDEO_ID_LEN) {
                continue;
            }
            let id = &rest[..VIDEO_ID_LEN];
            // Reject ids that keep going past 11 chars
            let next = rest[VIDEO_ID_LEN..].chars().next();
            if is_video_id(id) && !next.is_some_and(is_id_char) {
                return Some(id);
            }
        }
    }
    tracing::warn!(url, "Could not extract video id");
    None
}

/// Thumbnail URL for a video id (high-quality default frame).
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

/// Browser watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Derive the thumbnail URL straight from a video URL, if recognized.
pub fn derive_thumbnail(url: &str) -> Option<String> {
    extract_video_id(url).map(thumbnail_url)
}

fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN && s.chars().all(is_id_char)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

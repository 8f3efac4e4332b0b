use crate::domain::model::GalleryPost;
use crate::utils::error::Result;
use askama::Template;
use std::cmp::Reverse;

/// Marker identifying Canva page links. The remainder after the first
/// occurrence is reused verbatim in the thumbnail URL.
const CANVA_MARKER: &str = "canva.com/";

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryTemplate {
    tiles: Vec<Tile>,
}

/// One rendered grid tile. Only records with a resolvable image become tiles.
struct Tile {
    image_url: String,
    title: String,
    caption: String,
    date_label: String,
}

/// Order posts newest-first. Undated posts carry the epoch sort key, so they
/// end up in a run at the end; ties keep their fetched order (stable sort).
pub fn sort_posts(posts: &mut [GalleryPost]) {
    posts.sort_by_key(|post| Reverse(post.sort_date()));
}

/// Resolve a raw image reference to a usable image source.
///
/// Canva page links are not directly embeddable; Canva serves a preview at
/// `<link>/thumbnail`, so those are rewritten. Anything else is assumed to be
/// a direct media URL and passed through. Empty input stays empty, which marks
/// the record for dropping.
pub fn normalize_image_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Some(idx) = raw.find(CANVA_MARKER) {
        let remainder = &raw[idx + CANVA_MARKER.len()..];
        return format!("https://canva.com/{}/thumbnail", remainder);
    }

    raw.to_string()
}

/// Render the full gallery document: sort, normalize, drop image-less
/// records, and emit the static shell around the tile sequence. All
/// interpolated text is HTML-escaped by the template engine.
pub fn render_gallery(mut posts: Vec<GalleryPost>) -> Result<String> {
    sort_posts(&mut posts);

    let tiles = posts
        .into_iter()
        .filter_map(|post| {
            let image_url = normalize_image_url(&post.image_url);
            if image_url.is_empty() {
                return None;
            }
            Some(Tile {
                image_url,
                title: post.title,
                caption: post.caption,
                date_label: post.date_label,
            })
        })
        .collect();

    let document = GalleryTemplate { tiles }.render()?;
    Ok(document)
}

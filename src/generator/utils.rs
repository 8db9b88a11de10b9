use crate::{metadata::StoredPost, renderer::render_markdown, sidenote::Sidenotes};

use super::data::{Epigraph, PostView};

pub(super) fn split_epigraph(epigraph: &str) -> Epigraph<'_> {
    match epigraph.split_once("--") {
        Some((quote, source)) => {
            let source = source.trim();
            Epigraph {
                quote: quote.trim(),
                source: (!source.is_empty()).then_some(source),
            }
        }
        None => Epigraph {
            quote: epigraph.trim(),
            source: None,
        },
    }
}

/// Renders bodies in the given order. One sidenote counter spans the whole
/// list so ids stay unique on the index page.
pub(super) fn render_posts(posts: &[StoredPost]) -> Vec<PostView<'_>> {
    let mut sidenotes = Sidenotes::new();
    posts
        .iter()
        .map(|meta| PostView {
            meta,
            content: render_markdown(&sidenotes.convert(&meta.body)),
        })
        .collect()
}

use crate::metadata::StoredPost;

/// A stored post whose body has been rendered to HTML.
#[derive(Debug, Clone)]
pub(super) struct PostView<'a> {
    pub meta: &'a StoredPost,
    pub content: String,
}

/// Quote and attribution of an epigraph, split on the first `--`.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Epigraph<'a> {
    pub quote: &'a str,
    pub source: Option<&'a str>,
}

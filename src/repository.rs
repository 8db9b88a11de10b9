use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, info, warn};

use crate::{
    frontmatter,
    metadata::{Post, StoredPost},
};

pub(crate) const POST_EXTENSION: &str = "md";

/// Flat directory of `.md` post files.
#[derive(Debug)]
pub(crate) struct PostRepository<'a> {
    posts_dir: &'a Path,
}

impl<'a> PostRepository<'a> {
    pub fn new(posts_dir: &'a Path) -> Self {
        Self { posts_dir }
    }

    /// Writes `post` to a new file, creating the posts directory if needed.
    pub fn save(&self, post: &Post) -> anyhow::Result<PathBuf> {
        if !self.posts_dir.exists() {
            fs_extra::dir::create_all(self.posts_dir, false)
                .with_context(|| format!("while creating {:?}", self.posts_dir))?;
        }

        let path = self.posts_dir.join(post.file_name());
        let content = frontmatter::encode(post)?;
        let mut fd = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("while creating {path:?}"))?;
        fd.write_all(content.as_bytes())
            .with_context(|| format!("while writing {path:?}"))?;

        info!("Wrote post {} to {path:?}", post.id);
        Ok(path)
    }

    fn post_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut paths = vec![];
        let entries = std::fs::read_dir(self.posts_dir)
            .with_context(|| format!("while listing {:?}", self.posts_dir))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file()
                && path.extension().is_some_and(|ext| ext == POST_EXTENSION)
            {
                paths.push(path);
            }
        }
        // read_dir order is unspecified
        paths.sort();
        Ok(paths)
    }

    /// Every stored post, newest first.
    pub fn load_all(&self) -> anyhow::Result<Vec<StoredPost>> {
        let mut posts = vec![];
        for path in self.post_paths()? {
            debug!("Loading {path:?}");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("while loading {path:?}"))?;
            let front_matter = frontmatter::decode(&content);
            if front_matter.fields.is_empty() {
                warn!("{path:?} has no front matter");
            }
            posts.push(front_matter.into_stored_post());
        }

        posts.sort_by(sort_post);
        Ok(posts)
    }
}

/// Descending by timestamp. Canonical timestamps order the same as strings.
pub(crate) fn sort_post(a: &StoredPost, b: &StoredPost) -> std::cmp::Ordering {
    b.timestamp.cmp(&a.timestamp)
}

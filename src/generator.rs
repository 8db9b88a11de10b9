use std::path::PathBuf;

use anyhow::Context as _;
use log::info;

use crate::{context::Context, metadata::Post, repository::PostRepository};

mod data;
mod page;
mod utils;

/// Stores `post` and rebuilds the index. Returns the path of the new post file.
pub(crate) fn add_post(ctx: &Context, post: &Post) -> anyhow::Result<PathBuf> {
    let path = PostRepository::new(&ctx.posts_dir).save(post)?;
    generate(ctx)?;
    Ok(path)
}

/// Rebuilds the index page from every stored post.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<()> {
    let posts = PostRepository::new(&ctx.posts_dir).load_all()?;
    let views = utils::render_posts(&posts);
    let index = page::render_index(ctx, &views);

    // nothing is written until every post has loaded
    if let Some(parent) = ctx.out_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("while creating {parent:?}"))?;
        }
    }
    std::fs::write(&ctx.out_file, index)
        .with_context(|| format!("while writing {:?}", ctx.out_file))?;

    info!("Wrote {} posts to {:?}", views.len(), ctx.out_file);
    Ok(())
}

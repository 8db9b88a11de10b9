use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::context::Context;

use super::{
    data::{Epigraph, PostView},
    utils::split_epigraph,
};

fn render_epigraph(epigraph: &Epigraph) -> Markup {
    html! {
        blockquote.epigraph {
            p { em { (epigraph.quote) } }
            @if let Some(source) = epigraph.source {
                footer { (source) }
            }
        }
    }
}

fn render_section(post: &PostView) -> Markup {
    let meta = post.meta;
    html! {
        section.section id={ "post-" (meta.id) } {
            h2 { (meta.title) }
            p.date { (meta.date) }
            // an image replaces the epigraph
            @if !meta.image.is_empty() {
                figure {
                    img src=(meta.image) alt=(meta.title) style="max-width:100%;margin-bottom:1em;";
                }
            } @else if !meta.epigraph.is_empty() {
                (render_epigraph(&split_epigraph(&meta.epigraph)))
            }
            (PreEscaped(post.content.as_str()))
            @if !meta.link.is_empty() {
                p {
                    a href=(meta.link) target="_blank" rel="noopener noreferrer" { "Link" }
                }
            }
        }
    }
}

pub(super) fn render_index(ctx: &Context, posts: &[PostView]) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.site_name) }
                @for href in &ctx.stylesheets {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                header {
                    h1 { (ctx.site_name) }
                }
                article {
                    @for post in posts {
                        (render_section(post))
                    }
                }
                footer {
                    "© " (ctx.copyright_year) " " (ctx.site_name) " " (PreEscaped("&mdash;")) " " (ctx.tagline)
                }
            }
        }
    }
    .into_string()
}

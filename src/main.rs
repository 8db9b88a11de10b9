use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDateTime};
use clap::{command, error::ErrorKind, Arg, ArgMatches, Command};
use context::Context;
use generator::add_post;
use metadata::Post;

mod context;
mod frontmatter;
mod generator;
mod metadata;
mod renderer;
mod repository;
mod sidenote;

fn cli() -> Command {
    command!().args(&[
        Arg::new("title")
            .help("Title of the post")
            .required(true)
            .allow_hyphen_values(true),
        Arg::new("content")
            .help("Markdown body. ^[text] becomes a sidenote")
            .required(true)
            .allow_hyphen_values(true),
        Arg::new("link")
            .help("External link shown below the post")
            .allow_hyphen_values(true),
        Arg::new("image")
            .help("Image shown above the post")
            .allow_hyphen_values(true),
        Arg::new("epigraph")
            .help("Quotation shown above the post, as 'quote -- source'")
            .allow_hyphen_values(true),
        Arg::new("posts_dir")
            .long("posts-dir")
            .short('p')
            .help("Directory path of posts. Created if missing.")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("posts"),
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Path of the generated index page. Overwritten on every run.")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("index.html"),
    ])
}

fn parse_args() -> ArgMatches {
    match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage goes to stdout
            println!("{}", e.render());
            std::process::exit(1);
        }
    }
}

fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn context_from(matches: &ArgMatches, year: i32) -> Context {
    let posts_dir: &PathBuf = matches.get_one("posts_dir").unwrap();
    let out_file: &PathBuf = matches.get_one("output").unwrap();
    Context::new(posts_dir.to_owned(), out_file.to_owned(), year)
}

fn post_from(matches: &ArgMatches, now: NaiveDateTime) -> anyhow::Result<Post> {
    let title: &String = matches.get_one("title").unwrap();
    let content: &String = matches.get_one("content").unwrap();
    Post::new(
        title,
        content,
        optional(matches, "link"),
        optional(matches, "image"),
        optional(matches, "epigraph"),
        now,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = parse_args();
    let now = Local::now().naive_local();

    let ctx = context_from(&matches, now.year()).with_env();
    let post = post_from(&matches, now)?;

    add_post(&ctx, &post)?;
    println!("Post '{}' added and site updated. ID: {}", post.title, post.id);

    Ok(())
}

use std::path::PathBuf;

pub(crate) const DEFAULT_SITE_NAME: &str = "Dusty Print Books";
pub(crate) const DEFAULT_TAGLINE: &str = "This is a reading list.";
pub(crate) const DEFAULT_STYLESHEETS: [&str; 2] = ["tufte.css", "site-custom.css"];

/// Everything a run needs to know about the site being built.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub out_file: PathBuf,

    pub site_name: String,
    pub tagline: String,
    pub stylesheets: Vec<String>,
    pub copyright_year: i32,
}

impl Context {
    pub fn new(posts_dir: PathBuf, out_file: PathBuf, copyright_year: i32) -> Self {
        Self {
            posts_dir,
            out_file,
            site_name: DEFAULT_SITE_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect(),
            copyright_year,
        }
    }

    /// Overrides site name and tagline from `SITE_NAME` / `SITE_TAGLINE`.
    pub fn with_env(mut self) -> Self {
        if let Ok(name) = std::env::var("SITE_NAME") {
            self.site_name = name;
        }
        if let Ok(tagline) = std::env::var("SITE_TAGLINE") {
            self.tagline = tagline;
        }
        self
    }
}

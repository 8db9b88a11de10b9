use maud::{html, PreEscaped};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SIDENOTE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^\[(.+?)\]").unwrap());

/// Rewrites `^[note]` spans into tufte.css margin notes.
///
/// The counter lives as long as the value does, so converting several
/// bodies through the same `Sidenotes` keeps `sn-N` ids unique across them.
#[derive(Debug, Default)]
pub(crate) struct Sidenotes {
    count: usize,
}

impl Sidenotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert(&mut self, markdown: &str) -> String {
        SIDENOTE_PATTERN
            .replace_all(markdown, |caps: &Captures| {
                self.count += 1;
                render_sidenote(self.count, &caps[1])
            })
            .into_owned()
    }
}

fn render_sidenote(n: usize, text: &str) -> String {
    let id = format!("sn-{n}");
    html! {
        label for=(id) class="margin-toggle" { (PreEscaped("&#8853;")) }
        input type="checkbox" id=(id) class="margin-toggle";
        span.sidenote { (PreEscaped(text)) }
    }
    .into()
}

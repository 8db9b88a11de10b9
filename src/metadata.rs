use anyhow::bail;
use chrono::{NaiveDateTime, Timelike};
use uuid::Uuid;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%B %d, %Y";

/// A post as authored, before it is written to the posts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub id: String,
    pub title: String,
    pub date: String,
    pub timestamp: NaiveDateTime,
    pub link: Option<String>,
    pub image: Option<String>,
    pub epigraph: Option<String>,
    pub body: String,
}

/// A post as decoded from disk. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StoredPost {
    pub id: String,
    pub title: String,
    pub date: String,
    pub timestamp: String,
    pub link: String,
    pub image: String,
    pub epigraph: String,
    pub body: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Post {
    pub fn new(
        title: &str,
        body: &str,
        link: Option<String>,
        image: Option<String>,
        epigraph: Option<String>,
        created: NaiveDateTime,
    ) -> anyhow::Result<Self> {
        if title.trim().is_empty() {
            bail!("title must not be empty");
        }
        if sanitize_title(title).is_empty() {
            bail!("title {title:?} has no characters usable in a file name");
        }
        // the stored timestamp has whole seconds only
        let timestamp = created.with_nanosecond(0).unwrap_or(created);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: timestamp.format(DATE_FORMAT).to_string(),
            timestamp,
            link: non_empty(link),
            image: non_empty(image),
            epigraph: non_empty(epigraph),
            body: body.trim().to_string(),
        })
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `{date}_{time}_{title}_{id}.md`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.md",
            self.timestamp.format("%Y-%m-%d_%H-%M-%S"),
            sanitize_title(&self.title),
            self.id
        )
    }
}

pub(crate) fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim_end()
        .replace(' ', "_")
}

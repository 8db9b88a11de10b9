use std::collections::HashMap;
use std::fmt::Write as _;

use log::debug;

use crate::metadata::{Post, StoredPost};

pub(crate) const DELIMITER: &str = "---";

/// Decoded front matter block and the body that follows it.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub body: String,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn into_stored_post(self) -> StoredPost {
        StoredPost {
            id: self.get("id").to_string(),
            title: self.get("title").to_string(),
            date: self.get("date").to_string(),
            timestamp: self.get("timestamp").to_string(),
            link: self.get("link").to_string(),
            image: self.get("image").to_string(),
            epigraph: self.get("epigraph").to_string(),
            body: self.body,
        }
    }
}

// JSON string literals: plain values stay `"like this"`, quotes and
// backslashes get escaped.
fn quote(value: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        // files written by hand may carry raw quotes inside the value.
        // A hand-written `\n` or `\t` still reads as an escape.
        serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw[1..raw.len() - 1].to_string())
    } else {
        raw.to_string()
    }
}

pub(crate) fn encode(post: &Post) -> anyhow::Result<String> {
    let timestamp = post.timestamp_str();
    let fields = [
        ("id", post.id.as_str()),
        ("title", post.title.as_str()),
        ("date", post.date.as_str()),
        ("timestamp", timestamp.as_str()),
        ("link", post.link.as_deref().unwrap_or("")),
        ("image", post.image.as_deref().unwrap_or("")),
        ("epigraph", post.epigraph.as_deref().unwrap_or("")),
    ];

    let mut out = String::new();
    writeln!(out, "{DELIMITER}")?;
    for (key, value) in fields {
        writeln!(out, "{}: {}", key, quote(value)?)?;
    }
    writeln!(out, "{DELIMITER}")?;
    writeln!(out)?;
    writeln!(out, "{}", post.body.trim())?;

    Ok(out)
}

pub(crate) fn decode(content: &str) -> FrontMatter {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return FrontMatter {
            fields: HashMap::new(),
            body: content.trim().to_string(),
        };
    }

    let mut fields = HashMap::new();
    let mut i = 1;
    while i < lines.len() && lines[i].trim() != DELIMITER {
        match lines[i].split_once(':') {
            Some((key, value)) => {
                fields.insert(key.trim().to_string(), unquote(value));
            }
            None => debug!("skipping front matter line {:?}", lines[i]),
        }
        i += 1;
    }

    let body = lines.get(i + 1..).unwrap_or_default().join("\n");
    FrontMatter {
        fields,
        body: body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_post() -> Post {
        let created = NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut post = Post::new(
            "Dune",
            "  The spice ^[melange] must flow.\n\n| a | b |\n|---|---|\n| 1 | 2 |\n",
            Some("https://example.com/dune".to_string()),
            None,
            Some("Fear is the mind-killer -- Frank Herbert".to_string()),
            created,
        )
        .unwrap();
        post.id = "0b7e3a2c-1111-4222-8333-944455556666".to_string();
        post
    }

    #[test]
    fn test_encode() {
        let encoded = encode(&sample_post()).unwrap();
        assert_eq!(
            encoded,
            r#"---
id: "0b7e3a2c-1111-4222-8333-944455556666"
title: "Dune"
date: "March 03, 2025"
timestamp: "2025-03-03T09:30:00"
link: "https://example.com/dune"
image: ""
epigraph: "Fear is the mind-killer -- Frank Herbert"
---

The spice ^[melange] must flow.

| a | b |
|---|---|
| 1 | 2 |
"#
        );
    }

    #[test]
    fn test_round_trip() {
        let post = sample_post();
        let stored = decode(&encode(&post).unwrap()).into_stored_post();

        assert_eq!(stored.id, post.id);
        assert_eq!(stored.title, post.title);
        assert_eq!(stored.date, post.date);
        assert_eq!(stored.timestamp, post.timestamp_str());
        assert_eq!(stored.link, "https://example.com/dune");
        assert_eq!(stored.image, "");
        assert_eq!(stored.epigraph, "Fear is the mind-killer -- Frank Herbert");
        assert_eq!(stored.body, post.body);
    }

    #[test]
    fn test_round_trip_with_quotes() {
        let mut post = sample_post();
        post.title = r#"The "Real" Story: a \ b"#.to_string();
        post.epigraph = Some("\"Quoted\" -- Someone".to_string());

        let encoded = encode(&post).unwrap();
        assert!(encoded.contains(r#"title: "The \"Real\" Story: a \\ b""#));

        let stored = decode(&encoded).into_stored_post();
        assert_eq!(stored.title, post.title);
        assert_eq!(stored.epigraph, "\"Quoted\" -- Someone");
    }

    #[test]
    fn test_decode_legacy_unescaped() {
        let content = "---\nid: abc\ntitle: \"A \"quoted\" title\"\n---\n\nbody\n";
        let fm = decode(content);
        assert_eq!(fm.get("id"), "abc");
        assert_eq!(fm.get("title"), "A \"quoted\" title");
        assert_eq!(fm.body, "body");
    }

    #[test]
    fn test_round_trip_multiline_epigraph() {
        let mut post = sample_post();
        post.epigraph = Some("Line one\nLine two\t-- Someone".to_string());

        let encoded = encode(&post).unwrap();
        assert!(encoded.contains(r#"epigraph: "Line one\nLine two\t-- Someone""#));
        assert_eq!(decode(&encoded).get("epigraph"), "Line one\nLine two\t-- Someone");
    }

    #[test]
    fn test_decode_backslashes_are_escapes() {
        let fm = decode(r#"---
title: "C:\notes"
image: "C:\quux"
---
"#);
        // a valid escape is unescaped, an invalid one keeps the raw text
        assert_eq!(fm.get("title"), "C:\notes");
        assert_eq!(fm.get("image"), "C:\\quux");
    }

    #[test]
    fn test_decode_without_front_matter() {
        let content = "\n# Just markdown\n\ntitle: not metadata\n";
        let fm = decode(content);
        assert!(fm.fields.is_empty());
        assert_eq!(fm.body, "# Just markdown\n\ntitle: not metadata");
    }

    #[test]
    fn test_decode_skips_lines_without_colon() {
        let content = "---\ntitle: \"x\"\nnonsense line\nlink: \"https://a.b/c\"\n---\ntext";
        let fm = decode(content);
        assert_eq!(fm.fields.len(), 2);
        assert_eq!(fm.get("link"), "https://a.b/c");
        assert_eq!(fm.get("missing"), "");
        assert_eq!(fm.body, "text");
    }

    #[test]
    fn test_decode_unterminated() {
        let fm = decode("---\ntitle: \"x\"\n");
        assert_eq!(fm.get("title"), "x");
        assert_eq!(fm.body, "");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), FrontMatter::default());
    }
}

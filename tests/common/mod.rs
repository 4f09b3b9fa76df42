// Shared test helpers for wikitext2html.
#![allow(dead_code)]

use std::convert::Infallible;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use wikitext2html::{ArticlePath, Options};

pub const ARTICLE_PATH: &str = "https://en.wikipedia.org/wiki/$1";

/// Resolver used throughout the tests: English Wikipedia article URLs.
pub fn enwiki(title: &str) -> Result<String, Infallible> {
    Ok(format!("https://en.wikipedia.org/wiki/{title}"))
}

/// Article-path resolver for English Wikipedia.
pub fn enwiki_path() -> ArticlePath {
    ArticlePath::new(ARTICLE_PATH).expect("valid article path")
}

/// Options read from a fixture's `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureConfig {
    external_links: bool,
    page: Option<String>,
}

/// A loaded fixture.
pub struct Fixture {
    pub text: String,
    pub expected_html: String,
    pub options: Options,
}

/// Load a test fixture's input wikitext, expected HTML, and options.
///
/// Fixture directories contain `index.txt`, `index.html`, and optionally
/// `index.json`. A single trailing newline is stripped from both files.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let text = fs::read_to_string(base.join("index.txt"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.txt", name));
    let html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name));

    let config: FixtureConfig = match fs::read_to_string(base.join("index.json")) {
        Ok(json) => serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("Bad fixture config {}/index.json: {}", name, err)),
        Err(_) => FixtureConfig::default(),
    };

    let mut options = Options::new().with_external_links(config.external_links);
    if let Some(page) = config.page {
        options = options.with_page(page);
    }

    Fixture {
        text: strip_newline(text),
        expected_html: strip_newline(html),
        options,
    }
}

fn strip_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
    }
    s
}

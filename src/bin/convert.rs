//! convert - render a wikitext snippet from stdin as HTML

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use wikitext2html::{convert_with, ArticlePath, Options};

#[derive(Parser)]
#[command(name = "convert")]
#[command(version, about = "Render an edit summary or tag label as safe HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    echo '/* History */ fixed [[typo]]' | convert --page 'Roman Empire'
    echo '[https://example.org Docs]' | convert --external-links")]
struct Cli {
    /// Convert masked `[url label]` links (tag labels)
    #[arg(short, long)]
    external_links: bool,

    /// Page that `/* section */` references link into
    #[arg(short, long, value_name = "TITLE")]
    page: Option<String>,

    /// Article path template used to resolve page titles
    #[arg(
        short,
        long,
        value_name = "TEMPLATE",
        default_value = "https://en.wikipedia.org/wiki/$1"
    )]
    article_path: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let wiki = match ArticlePath::new(cli.article_path) {
        Ok(wiki) => wiki,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut options = Options::new().with_external_links(cli.external_links);
    if let Some(page) = cli.page {
        options = options.with_page(page);
    }

    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        eprintln!("error: reading stdin: {e}");
        return ExitCode::FAILURE;
    }

    match convert_with(text.trim_end_matches('\n'), &options, &wiki) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Reads one MHTML archive from stdin and prints the converted document as
//! JSON on stdout. Useful for piping single archives through other tools.

use std::io::{self, Read};

use mhtml2md::{convert_bytes, Options};
use serde::Serialize;

#[derive(Serialize)]
struct Output {
    title: String,
    markdown: String,
    subject: Option<String>,
    location: Option<String>,
    date: Option<String>,
    error: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Read the archive from stdin
    let mut raw = Vec::new();
    if io::stdin().read_to_end(&mut raw).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match convert_bytes(&raw, "stdin", &Options::default()) {
        Ok(doc) => Output {
            markdown: doc.to_markdown(),
            title: doc.title,
            subject: doc.headers.subject,
            location: doc.headers.location.map(String::from),
            date: doc.headers.date.map(|d| d.to_rfc3339()),
            error: None,
        },
        Err(e) => Output {
            title: String::new(),
            markdown: String::new(),
            subject: None,
            location: None,
            date: None,
            error: Some(e.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}

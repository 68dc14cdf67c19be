#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]
#![expect(clippy::print_stderr, reason = "CLI output is emitted here")]

//! CLI output presenter.

use clap::ValueEnum;
use serde_json::{Value, json};

use crate::common::Colors;
use crate::domain::WeeklyChart;
use crate::usecases::PublishOutput;

const PROGRAM_NAME: &str = "soundtrack";

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait Presenter {
    fn present_preview(&self, chart: &WeeklyChart);

    fn present_published(&self, chart: &WeeklyChart, published: &PublishOutput);

    fn present_client_error(&self, error: &ClientErrorView);
}

#[derive(Clone, Debug)]
pub struct ClientErrorView {
    pub message: String,
    pub suggestion: Option<String>,
    pub retryable: bool,
    pub json: Option<String>,
}

pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present_preview(&self, chart: &WeeklyChart) {
        println!("{}", Colors::bold(&chart.title));
        println!();
        println!("{}", chart.content);
    }

    fn present_published(&self, chart: &WeeklyChart, published: &PublishOutput) {
        println!(
            "{} Updated gist {}",
            Colors::success("✓"),
            published.document_id
        );
        println!("  Title: {}", published.title);
        println!("  {}", Colors::dim(&format!("Was: {}", published.previous_title)));
        println!("  Artists: {}", chart.entries.len());
    }

    fn present_client_error(&self, error: &ClientErrorView) {
        eprintln!(
            "{}: {} {}",
            PROGRAM_NAME,
            Colors::error("Error:"),
            error.message
        );
        if let Some(suggestion) = error.suggestion.as_deref() {
            eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
        }
        if error.retryable {
            eprintln!(
                "{}",
                Colors::dim("(This error may be transient - retry may succeed)")
            );
        }
    }
}

pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn present_preview(&self, chart: &WeeklyChart) {
        println!(
            "{}",
            serde_json::to_string_pretty(&chart_json(chart)).unwrap_or_default()
        );
    }

    fn present_published(&self, chart: &WeeklyChart, published: &PublishOutput) {
        println!(
            "{}",
            serde_json::to_string_pretty(&published_json(chart, published)).unwrap_or_default()
        );
    }

    fn present_client_error(&self, error: &ClientErrorView) {
        if let Some(json) = error.json.as_deref() {
            eprintln!("{}", json);
            return;
        }

        let mut output = json!({
            "success": false,
            "error": error.message,
            "retryable": error.retryable,
        });
        if let Some(suggestion) = error.suggestion.as_ref() {
            output["suggestion"] = json!(suggestion);
        }
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    }
}

pub fn create_presenter(format: &OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}

pub fn chart_json(chart: &WeeklyChart) -> Value {
    let entries: Vec<Value> = chart
        .entries
        .iter()
        .map(|entry| {
            json!({
                "rank": entry.rank,
                "name": entry.name,
                "play_count": entry.play_count,
                "share": entry.share,
                "is_new": entry.is_new,
            })
        })
        .collect();
    let lookup_failures: Vec<Value> = chart
        .lookup_failures
        .iter()
        .map(|failure| json!({ "artist": failure.artist, "reason": failure.reason }))
        .collect();

    json!({
        "title": chart.title,
        "window": chart.window.as_period(),
        "date": chart.date.format("%Y-%m-%d").to_string(),
        "content": chart.content,
        "entries": entries,
        "lookup_failures": lookup_failures,
    })
}

pub fn published_json(chart: &WeeklyChart, published: &PublishOutput) -> Value {
    json!({
        "success": true,
        "gist_id": published.document_id.as_str(),
        "title": published.title,
        "previous_title": published.previous_title,
        "chart": chart_json(chart),
    })
}

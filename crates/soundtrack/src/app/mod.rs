//! CLI application layer and composition root wiring.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use tracing::{debug, info, warn};

pub mod commands;
pub mod config;
pub mod error;

use crate::adapters::create_presenter;
use crate::app::commands::{Cli, Commands, GistArgs, LastfmArgs, OutputFormat};
use crate::app::config::{AppConfig, ChartConfig};
use crate::app::error::{CliError, ErrorReport, exit_codes, find_error};
use crate::common::color_init;
use crate::common::telemetry;
use crate::domain::{ChartLayout, WeeklyChart};
use crate::infra::{GistClient, HttpConfig, LastfmClient, SystemClock};
use crate::usecases::{
    PublishChartUseCase, PublishChartUseCaseImpl, PublishInput, WeeklyChartInput,
    WeeklyChartUseCase, WeeklyChartUseCaseImpl,
};

const PROGRAM_NAME: &str = "soundtrack";

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<i32> {
        let exit_code = match self.execute() {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(e),
        };
        Ok(exit_code)
    }

    fn execute(&self) -> Result<()> {
        let cli = Cli::parse();
        let _telemetry = telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });
        color_init(cli.no_color);
        let format = cli.effective_format();
        debug!(
            command = command_name(&cli.command),
            format = ?format,
            "CLI command parsed"
        );

        self.dispatch_command(&cli.command, format)
            .map_err(|e| self.wrap_error(e, format))
    }

    fn dispatch_command(&self, command: &Commands, format: OutputFormat) -> Result<()> {
        match command {
            Commands::Completions { shell } => {
                let mut cmd = Cli::command();
                generate(*shell, &mut cmd, PROGRAM_NAME, &mut io::stdout());
                Ok(())
            }
            Commands::Preview { lastfm } => self.handle_preview(lastfm, format),
            Commands::Update { lastfm, gist } => self.handle_update(lastfm, gist, format),
        }
    }

    fn handle_preview(&self, lastfm: &LastfmArgs, format: OutputFormat) -> Result<()> {
        let config = ChartConfig::from_args(lastfm)?;
        let http = HttpConfig::from_env()
            .build_client()
            .context("failed to build HTTP client")?;

        let chart = build_chart(&config, http)?;
        create_presenter(&format).present_preview(&chart);
        Ok(())
    }

    fn handle_update(
        &self,
        lastfm: &LastfmArgs,
        gist: &GistArgs,
        format: OutputFormat,
    ) -> Result<()> {
        let config = AppConfig::from_args(lastfm, gist)?;
        let http = HttpConfig::from_env()
            .build_client()
            .context("failed to build HTTP client")?;

        let chart = build_chart(&config.chart, http.clone())?;

        let store = GistClient::new(
            http,
            config.publish.api_url.clone(),
            config.publish.token.clone(),
        );
        let publish = PublishChartUseCaseImpl::new(Arc::new(store));
        let published = publish
            .execute(PublishInput {
                document_id: config.publish.gist_id.clone(),
                title: chart.title.clone(),
                content: chart.content.clone(),
            })
            .with_context(|| format!("failed to update gist {}", config.publish.gist_id))?;

        info!(
            gist_id = %published.document_id,
            title = %published.title,
            artists = chart.entries.len(),
            "Chart published"
        );
        create_presenter(&format).present_published(&chart, &published);
        Ok(())
    }

    fn handle_error(&self, e: anyhow::Error) -> i32 {
        if let Some(cli_error) = find_error::<CliError>(&e) {
            let report = ErrorReport::from_error(&e);
            create_presenter(&cli_error.format)
                .present_client_error(&report.into_view(cli_error.json.clone()));
            return cli_error.exit_code;
        }

        let report = ErrorReport::from_error(&e);
        let exit_code = report.exit_code;
        create_presenter(&OutputFormat::Text).present_client_error(&report.into_view(None));
        exit_code
    }

    fn wrap_error(&self, error: anyhow::Error, format: OutputFormat) -> anyhow::Error {
        if find_error::<CliError>(&error).is_some() {
            return error;
        }
        if format != OutputFormat::Json {
            return error;
        }

        let report = ErrorReport::from_error(&error);
        anyhow::Error::new(CliError::new(
            format,
            report.message.clone(),
            Some(report.to_json_string()),
            report.exit_code,
        ))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Update { .. } => "update",
        Commands::Preview { .. } => "preview",
        Commands::Completions { .. } => "completions",
    }
}

fn build_chart(config: &ChartConfig, http: reqwest::blocking::Client) -> Result<WeeklyChart> {
    let history = LastfmClient::new(http, config.api_url.clone(), config.api_key.clone());
    let usecase = WeeklyChartUseCaseImpl::new(Arc::new(history), Arc::new(SystemClock::new()));

    let chart = usecase
        .execute(WeeklyChartInput {
            username: config.username.clone(),
            window: config.window,
            limit: config.limit,
            layout: ChartLayout::default(),
        })
        .with_context(|| format!("failed to fetch top artists for {}", config.username))?;

    for failure in &chart.lookup_failures {
        warn!(
            artist = %failure.artist,
            reason = %failure.reason,
            "Could not check whether artist is new; left unmarked"
        );
    }
    debug!(
        artists = chart.entries.len(),
        new = chart.entries.iter().filter(|entry| entry.is_new).count(),
        "Chart built"
    );

    Ok(chart)
}

//! Weekly chart use case.

use std::sync::Arc;

use crate::domain::{
    ChartLayout, ListeningWindow, LookupFailure, TopArtist, WeeklyChart, chart_entries,
    chart_title, render_chart,
};
use crate::usecases::ports::{Clock, ListeningHistory, ListeningHistoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyChartInput {
    pub username: String,
    pub window: ListeningWindow,
    pub limit: usize,
    pub layout: ChartLayout,
}

pub trait WeeklyChartUseCase: Send + Sync {
    fn execute(&self, input: WeeklyChartInput) -> Result<WeeklyChart, ListeningHistoryError>;
}

pub struct WeeklyChartUseCaseImpl<H: ListeningHistory, C: Clock> {
    history: Arc<H>,
    clock: Arc<C>,
}

impl<H: ListeningHistory, C: Clock> WeeklyChartUseCaseImpl<H, C> {
    pub fn new(history: Arc<H>, clock: Arc<C>) -> Self {
        Self { history, clock }
    }

    // An artist is new when every play the user has ever made of it falls in
    // the window. A failed lookup counts as "not new".
    fn is_new(
        &self,
        username: &str,
        artist: &TopArtist,
        failures: &mut Vec<LookupFailure>,
    ) -> bool {
        match self.history.artist_info(username, &artist.name) {
            Ok(stats) => stats.user_play_count == Some(artist.play_count),
            Err(err) => {
                failures.push(LookupFailure {
                    artist: artist.name.clone(),
                    reason: err.to_string(),
                });
                false
            }
        }
    }
}

impl<H: ListeningHistory, C: Clock> WeeklyChartUseCase for WeeklyChartUseCaseImpl<H, C> {
    fn execute(&self, input: WeeklyChartInput) -> Result<WeeklyChart, ListeningHistoryError> {
        let mut artists = self
            .history
            .top_artists(&input.username, input.window, input.limit)?;
        artists.truncate(input.limit);

        let mut lookup_failures = Vec::new();
        let entries = chart_entries(&artists, |artist| {
            self.is_new(&input.username, artist, &mut lookup_failures)
        });

        let date = self.clock.today();
        let content = render_chart(&entries, input.window, &input.layout);

        Ok(WeeklyChart {
            title: chart_title(input.window, date),
            window: input.window,
            date,
            entries,
            content,
            lookup_failures,
        })
    }
}

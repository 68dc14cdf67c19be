use std::fmt;

use chrono::NaiveDate;

/// One row of the provider's top-artists ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopArtist {
    pub name: String,
    pub play_count: u64,
    pub rank: u32,
}

/// The user's all-time numbers for a single artist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtistStats {
    pub user_play_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted, shareable text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
}

/// Time range the ranking covers, using the provider's period names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListeningWindow {
    #[default]
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
    Overall,
}

impl ListeningWindow {
    pub fn as_period(&self) -> &'static str {
        match self {
            ListeningWindow::Week => "7day",
            ListeningWindow::Month => "1month",
            ListeningWindow::Quarter => "3month",
            ListeningWindow::HalfYear => "6month",
            ListeningWindow::Year => "12month",
            ListeningWindow::Overall => "overall",
        }
    }

    /// Phrase used in the document title, e.g. "This week's".
    pub fn title_phrase(&self) -> &'static str {
        match self {
            ListeningWindow::Week => "This week's",
            ListeningWindow::Month => "This month's",
            ListeningWindow::Quarter => "This quarter's",
            ListeningWindow::HalfYear => "This half-year's",
            ListeningWindow::Year => "This year's",
            ListeningWindow::Overall => "All-time",
        }
    }

    /// Phrase used in the legend, e.g. "this week".
    pub fn legend_phrase(&self) -> &'static str {
        match self {
            ListeningWindow::Week => "this week",
            ListeningWindow::Month => "this month",
            ListeningWindow::Quarter => "in the last 3 months",
            ListeningWindow::HalfYear => "in the last 6 months",
            ListeningWindow::Year => "this year",
            ListeningWindow::Overall => "overall",
        }
    }
}

impl std::str::FromStr for ListeningWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7day" => Ok(ListeningWindow::Week),
            "1month" => Ok(ListeningWindow::Month),
            "3month" => Ok(ListeningWindow::Quarter),
            "6month" => Ok(ListeningWindow::HalfYear),
            "12month" => Ok(ListeningWindow::Year),
            "overall" => Ok(ListeningWindow::Overall),
            other => Err(format!("unknown listening window: {other}")),
        }
    }
}

impl fmt::Display for ListeningWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_period())
    }
}

/// A derived chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub rank: u32,
    pub name: String,
    pub play_count: u64,
    /// Fraction of the charted total, in `0.0..=1.0`.
    pub share: f64,
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub artist: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyChart {
    pub title: String,
    pub window: ListeningWindow,
    pub date: NaiveDate,
    pub entries: Vec<ChartEntry>,
    pub content: String,
    pub lookup_failures: Vec<LookupFailure>,
}

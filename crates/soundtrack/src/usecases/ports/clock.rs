use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current calendar date in UTC.
    fn today(&self) -> NaiveDate;
}

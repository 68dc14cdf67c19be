mod publish;
mod weekly_chart;

pub use publish::{PublishChartUseCase, PublishChartUseCaseImpl, PublishInput, PublishOutput};
pub use weekly_chart::{WeeklyChartInput, WeeklyChartUseCase, WeeklyChartUseCaseImpl};
pub mod ports;

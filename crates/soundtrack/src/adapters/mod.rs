pub mod presenter;

pub use presenter::{ClientErrorView, OutputFormat, Presenter, create_presenter};

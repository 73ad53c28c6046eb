//! `bt-output` — human-facing artifacts built from a solution path.
//!
//! Nothing here influences the search; every function consumes a finished
//! `Path` (or `Solution`) from `bt-search`.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`step`]    | `Step`, `materialize`                                 |
//! | [`text`]    | `render_text`, `render_step`                          |
//! | [`writer`]  | `PathWriter` trait                                    |
//! | [`csv`]     | `CsvWriter` (`steps.csv`, `summaries.csv`)            |
//! | [`row`]     | `StepRow`, `SummaryRow`                               |
//! | [`error`]   | `OutputError`, `OutputResult`                         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bt_output::{render_text, CsvWriter, PathWriter};
//!
//! println!("{}", render_text(&agents, &solution.path)?);
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_solution("time", &agents, &solution)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod step;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{StepRow, SummaryRow};
pub use step::{materialize, Step};
pub use text::{render_step, render_text};
pub use writer::PathWriter;

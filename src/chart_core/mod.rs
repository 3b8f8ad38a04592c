//! Chart Core - shot classification, aggregation, and chart output
//!
//! # Architecture
//!
//! ```text
//! RawShotEvent (feed) → classify_all → Vec<ShotEvent>
//!     ↓
//! summarize → six SummaryRows → SummaryCsvWriter → CSV
//!     ↓
//! partition (made / missed)
//!     +
//! court_template (hoop, paint, arcs) → ChartRenderer → PNG
//! ```

pub mod court;
pub mod csv_writer;
pub mod event;
pub mod render;
pub mod summary;

pub use court::{court_template, CourtPrimitive, CourtStyle, CourtTemplate, Viewport};
pub use csv_writer::{SummaryCsvWriter, WriterError};
pub use event::{classify_all, DataContractError, RawShotEvent, ShotEvent, ShotOutcome, ShotValue};
pub use render::{ChartRenderer, RenderError, RenderStyle};
pub use summary::{aggregate, partition, summarize, SummaryRow};

//! Campaign proposal reporting: channel cost breakdown, flat summary report
//! and line-itemized invoice, exportable as CSV or JSON.

pub mod breakdown;
pub mod csv;
pub mod format;
pub mod invoice;
pub mod summary;

pub use breakdown::{channel_breakdown, ChannelBreakdownRow, CostUnit};
pub use invoice::{Invoice, InvoiceLine};
pub use summary::{SummaryReport, SummaryRow};

#[cfg(test)]
mod fixtures;

//! Host side of the layout contract
//!
//! - `demo`: DemoHost - headless host owning dataset, viewport and scroll offset
//! - `report`: LayoutReport - printable/serializable view of what a host shows

pub mod demo;
pub mod report;

pub use demo::DemoHost;
pub use report::LayoutReport;

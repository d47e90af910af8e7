/*!
 * Report Module
 * Text tables and JSON export of simulation results
 */

pub mod json;
pub mod table;

pub use json::{to_json, write_json, ExportDocument};
pub use table::{render_comparison, render_report, render_scenarios};

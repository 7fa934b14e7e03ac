//! Report module
//!
//! Turns forecasts into the nested contexts page templates consume:
//! - Per-area, per-day summaries for both unit systems
//! - Navigation bar and page slugs
//! - JSON files for the page renderer

pub mod context;
pub mod nav;
pub mod output;

pub use context::{
    AreaForecastContext, DaySummary, IntervalRow, PageContext, PeriodRain, UnitSystemContexts,
    build_all_contexts, build_area_context, build_unit_system, summarise_day,
};
pub use nav::{NavBar, NavLink, sanitize_name};
pub use output::write_contexts;

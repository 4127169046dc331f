pub mod chart;
pub mod format;
pub mod table_renderer;

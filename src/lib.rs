pub mod chart;
pub mod cli;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod table;

pub mod prelude {
    pub use crate::input::detect::Dialect;
    pub use crate::pipeline::load::TableCtx;
    pub use crate::table::project::ColumnTable;
}

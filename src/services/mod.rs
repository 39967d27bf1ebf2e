//! Report engine: date bucketing, cost reduction, comparison, assembly

pub mod assembler;
pub mod bucketer;
pub mod comparator;
pub mod reducer;

pub use assembler::ReportAssembler;
pub use bucketer::DateBucketer;
pub use comparator::MonthlyComparator;
pub use reducer::CostReducer;

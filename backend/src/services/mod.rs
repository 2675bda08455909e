//! Business logic services

pub mod export;
pub mod plan;

pub use export::PlanExport;
pub use plan::PlanService;

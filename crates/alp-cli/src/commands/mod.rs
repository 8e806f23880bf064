pub mod analyze;
pub mod dispatch;
pub mod plan;
pub mod recommend;
pub mod schema;
pub mod shared;

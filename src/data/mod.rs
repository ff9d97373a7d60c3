pub mod dataset;
pub mod groups;
pub mod merge;
pub mod selection;
pub mod session;
pub mod zoom;

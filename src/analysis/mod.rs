pub mod charts;
pub mod comparison;
pub mod improvement;
pub mod roadmap;
pub mod rounding;
pub mod sentiment;
pub mod validation;

pub mod domain;
pub mod transition;

pub mod apply;
pub mod rules;

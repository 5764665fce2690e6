// Domain layer - Core chapter model and policies

pub mod model;
pub mod rules;

pub mod evaluator;
pub mod threshold;

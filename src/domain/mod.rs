pub mod complexity;
pub mod inputs;
pub mod outputs;
pub mod waterfall;

pub mod identity;
pub mod outcome;
pub mod settings;

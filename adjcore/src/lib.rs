pub mod condition;
pub mod decision;
pub mod error;
pub mod instance;
pub mod permission;
pub mod role;

pub mod context;
pub mod locate;

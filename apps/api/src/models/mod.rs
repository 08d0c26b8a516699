pub mod note;
pub mod portfolio;

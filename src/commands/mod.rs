pub mod configure;
pub mod survey;

pub mod member;
pub mod person;
pub mod presence;

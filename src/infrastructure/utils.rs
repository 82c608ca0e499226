pub mod markdown;
pub mod persian;
pub mod valid_uuid;

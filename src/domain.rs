pub mod composer;
pub mod document;
pub mod entities;
pub mod localization;
pub mod ordering;
pub mod relevance;
pub mod use_cases;

// Interview questions: role catalog → page fetch → heading/paragraph pairs.

pub mod catalog;
pub mod handlers;
pub mod scraper;

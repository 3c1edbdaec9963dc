pub mod normalize;
mod parser;
pub mod scraper;
pub mod tsv;
pub mod types;

pub use scraper::WebScraper;
pub use types::Facility;

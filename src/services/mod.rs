pub mod analyzer;
pub mod fetcher;
pub mod footprint;
pub mod greencheck;
pub mod hosting;
pub mod recommend;
pub mod scraper;

pub use analyzer::AnalyzerService;
pub use fetcher::FetcherService;
pub use greencheck::GreenCheckService;
pub use hosting::HostingService;
pub use scraper::ScraperService;

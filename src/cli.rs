//! Command-line interface definition.
//!
//! # Examples
//!
//! ```bash
//! # Analyze one page against a local service
//! web_analyzer analyze example.com
//!
//! # Skip the slow sections and export the report
//! web_analyzer analyze example.com --skip ai,seo --export json,pdf --output-dir ./reports
//!
//! # Batch from arguments and a file, with a CSV summary
//! web_analyzer batch a.com b.com --file urls.txt --export-csv
//!
//! # Point at a remote service
//! WEB_ANALYZER_API_URL=http://analyzer.internal:8000 web_analyzer health
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{
    AnalysisSettings, LogFormat, LogLevel, API_URL_ENV, DEFAULT_API_URL, DEFAULT_CONTENT_LENGTH,
    DEFAULT_MAX_LINKS, DEFAULT_RECENT_LIMIT,
};
use crate::export::ExportFormat;
use crate::store::ReportSection;

#[derive(Debug, Parser)]
#[command(
    name = "web_analyzer",
    version,
    about = "Submits web pages to an analysis service and exports the reports."
)]
pub struct Cli {
    /// Base URL of the analysis service
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single URL
    Analyze(AnalyzeArgs),
    /// Analyze several URLs in one request
    Batch(BatchArgs),
    /// List the most recent stored analyses
    Recent {
        /// Number of entries to fetch
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: u32,
    },
    /// Check that the analysis service is up
    Health,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// URL to analyze; `https://` is assumed when no scheme is given
    pub url: String,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Sections to print (default: every section the report has)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub section: Vec<ReportSection>,

    /// Export formats to write
    #[arg(long, value_enum, value_delimiter = ',')]
    pub export: Vec<ExportFormat>,

    /// Directory exported files are written to
    #[arg(long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// URLs to analyze
    pub urls: Vec<String>,

    /// File with one URL per line (`#` starts a comment)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Write the batch summary as CSV
    #[arg(long)]
    pub export_csv: bool,

    /// Directory exported files are written to
    #[arg(long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Report sections that can be switched off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SkipSection {
    Metadata,
    Links,
    Images,
    Content,
    Ai,
    Seo,
    Headers,
    MetaTags,
    Performance,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Sections the service should not compute
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<SkipSection>,

    /// Maximum content characters returned (clamped to 1000-20000)
    #[arg(long, default_value_t = DEFAULT_CONTENT_LENGTH)]
    pub max_content_length: u32,

    /// Maximum links returned (clamped to 10-200)
    #[arg(long, default_value_t = DEFAULT_MAX_LINKS)]
    pub max_links: u32,

    /// Do not follow HTTP redirects
    #[arg(long)]
    pub no_follow_redirects: bool,
}

impl SettingsArgs {
    /// Builds the settings to submit. Numeric values are clamped later, when
    /// the request is built.
    pub fn to_settings(&self) -> AnalysisSettings {
        let mut settings = AnalysisSettings {
            max_content_length: self.max_content_length,
            max_links: self.max_links,
            follow_redirects: !self.no_follow_redirects,
            ..AnalysisSettings::default()
        };
        for section in &self.skip {
            match section {
                SkipSection::Metadata => settings.include_metadata = false,
                SkipSection::Links => settings.include_links = false,
                SkipSection::Images => settings.include_images = false,
                SkipSection::Content => settings.include_content = false,
                SkipSection::Ai => settings.include_ai_analysis = false,
                SkipSection::Seo => settings.include_seo_analysis = false,
                SkipSection::Headers => settings.include_headers = false,
                SkipSection::MetaTags => settings.include_meta_tags = false,
                SkipSection::Performance => settings.include_performance = false,
            }
        }
        settings
    }
}

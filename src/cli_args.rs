use clap::Parser;
use log::info;

use crate::settings::Settings;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated list of blog names (e.g., staff,engineering)"
    )]
    pub blogs: Vec<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of CSV files with blog,container,count,tagged records"
    )]
    pub src_files: Vec<String>,

    #[arg(long, help = "Container selector: body, #id or .class")]
    pub container: Option<String>,

    #[arg(long, help = "Number of posts to request per blog")]
    pub count: Option<u32>,

    #[arg(long, help = "Only read posts with this tag")]
    pub tagged: Option<String>,

    #[arg(long, short, help = "File to write; stdout when omitted")]
    pub output: Option<String>,

    #[arg(long, default_value = "settings.json", help = "Path to the settings file")]
    pub settings: String,

    #[arg(long = "fix-dates", help = "Print the day of the month instead of the weekday index")]
    pub fix_dates: bool,

    #[arg(long = "full-page", help = "Wrap output in a complete HTML document")]
    pub full_page: bool,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} blog(s) from --blogs", args.blogs.len());
        info!("Parsed {} file(s) from --src-files", args.src_files.len());

        args
    }

    /// Settings with every flag given on the command line taking precedence.
    pub fn apply_overrides(&self, settings: &Settings) -> Settings {
        let mut merged = settings.clone();
        if let Some(container) = &self.container {
            merged.container = container.clone();
        }
        if let Some(count) = self.count {
            merged.count = count;
        }
        if let Some(tagged) = &self.tagged {
            merged.tagged = tagged.clone();
        }
        if let Some(output) = &self.output {
            merged.output = output.clone();
        }
        merged.fix_day_of_month |= self.fix_dates;
        merged.full_page |= self.full_page;
        merged
    }
}

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use log::{error, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::cli_args::CommandLineArgs;
use crate::settings::{ReaderOptions, Settings};

/// Collects the blogs to read from the command line and source files.
pub struct BlogSources {
    pub options: Vec<ReaderOptions>,
}

impl BlogSources {
    /// `settings` must already carry the command-line overrides.
    pub fn new(settings: &Settings, cli_args: &CommandLineArgs) -> Result<Self> {
        let mut sources = BlogSources {
            options: Vec::new(),
        };

        for blog in &cli_args.blogs {
            let blog = blog.trim();
            if !blog.is_empty() {
                sources.options.push(settings.options_for(blog));
            }
        }

        for file_path in &cli_args.src_files {
            sources
                .options
                .extend(blogs_from_file(file_path, settings)?);
        }

        if sources.options.is_empty() {
            return Err(anyhow::anyhow!(
                "No blogs given. Use --blogs or --src-files."
            ));
        }

        info!("Collected {} blog(s) to read", sources.options.len());
        Ok(sources)
    }
}

fn blogs_from_file(file_path: &str, defaults: &Settings) -> Result<Vec<ReaderOptions>> {
    let path = Path::new(file_path);
    if !path.exists() {
        error!("File '{}' not found. Skipping...", file_path);
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", file_path))?;
    let options = blogs_from_reader(file, defaults)
        .with_context(|| format!("Failed to read blogs from {}", file_path))?;
    info!("Read {} blog(s) from '{}'", options.len(), file_path);
    Ok(options)
}

/// One record per blog: `blog[,container[,count[,tagged]]]`. Blank fields
/// fall back to `defaults`; lines starting with `#` are skipped.
pub fn blogs_from_reader<R: Read>(reader: R, defaults: &Settings) -> Result<Vec<ReaderOptions>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut result = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let blog = record.get(0).unwrap_or("");
        if blog.is_empty() {
            continue;
        }

        let mut options = defaults.options_for(blog);
        if let Some(container) = record.get(1).filter(|s| !s.is_empty()) {
            options.container = container.to_string();
        }
        if let Some(count) = record.get(2).filter(|s| !s.is_empty()) {
            match count.parse() {
                Ok(count) => options.count = count,
                Err(_) => warn!(
                    "Invalid count '{}' for blog '{}' on record {}, using {}",
                    count,
                    blog,
                    line + 1,
                    options.count
                ),
            }
        }
        if let Some(tagged) = record.get(3).filter(|s| !s.is_empty()) {
            options.tagged = tagged.to_string();
        }
        result.push(options);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_blogs_from_reader() {
        let data = "staff\n# disabled,#x\nengineering,#eng,5,rust\n  design , , , ux \nnews,,abc\n";
        let options = blogs_from_reader(data.as_bytes(), &Settings::default()).unwrap();

        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ReaderOptions::new("staff"));
        assert_eq!(
            options[1],
            ReaderOptions::new("engineering")
                .with_container("#eng")
                .with_count(5)
                .with_tagged("rust")
        );
        assert_eq!(options[2], ReaderOptions::new("design").with_tagged("ux"));
        assert_eq!(options[3].count, 10);
    }

    #[test]
    fn test_blog_sources_combines_cli_and_files() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"fromfile,#f\n").unwrap();

        let args = CommandLineArgs {
            blogs: vec!["staff".to_string(), " ".to_string()],
            src_files: vec![
                temp_file.path().to_str().unwrap().to_string(),
                "missing_file.csv".to_string(),
            ],
            count: Some(2),
            ..CommandLineArgs::default()
        };

        let settings = args.apply_overrides(&Settings::default());
        let sources = BlogSources::new(&settings, &args).unwrap();
        assert_eq!(sources.options.len(), 2);
        assert_eq!(sources.options[0].blog, "staff");
        assert_eq!(sources.options[0].count, 2);
        assert_eq!(sources.options[1].container, "#f");
        assert_eq!(sources.options[1].count, 2);
    }

    #[test]
    fn test_blog_sources_empty_is_error() {
        let args = CommandLineArgs::default();
        assert!(BlogSources::new(&Settings::default(), &args).is_err());
    }
}

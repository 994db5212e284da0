//! CLI argument parsing

use crate::error::{Error, Result};
use crate::mail::MailConfig;
use clap::Parser;
use std::path::PathBuf;

/// Scrape a job board's search results into a CSV file
#[derive(Parser, Debug)]
#[command(name = "jobharvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job title or keywords to search for
    #[arg(short = 'q', long)]
    pub title: String,

    /// Location to search in
    #[arg(short, long)]
    pub location: String,

    /// Output CSV path (truncated at start of run)
    #[arg(short, long, default_value = "jobs.csv")]
    pub output: PathBuf,

    /// Base URL of the job board
    #[arg(long, default_value = "https://ca.indeed.com")]
    pub base_url: String,

    /// Maximum pages to fetch (0 = unbounded)
    #[arg(long, default_value = "50")]
    pub max_pages: usize,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Page fetches per second
    #[arg(long, default_value = "1")]
    pub requests_per_second: u32,

    /// SMTP relay host; enables emailing the finished file
    #[arg(long)]
    pub smtp_host: Option<String>,

    /// SMTP submission port
    #[arg(long, default_value = "587")]
    pub smtp_port: u16,

    /// SMTP login username
    #[arg(long)]
    pub smtp_username: Option<String>,

    /// SMTP login password
    #[arg(long, env = "JOBHARVEST_SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Sender address for the results email
    #[arg(long)]
    pub mail_from: Option<String>,

    /// Recipient address for the results email
    #[arg(long)]
    pub mail_to: Option<String>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json_summary: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the mail config, if mailing was requested.
    ///
    /// The SMTP flags are all-or-nothing (port has a default): setting some
    /// but not all of host, username, password, from, and to is a config
    /// error rather than a silently skipped email.
    pub fn mail_config(&self) -> Result<Option<MailConfig>> {
        let any_set = self.smtp_host.is_some()
            || self.smtp_username.is_some()
            || self.smtp_password.is_some()
            || self.mail_from.is_some()
            || self.mail_to.is_some();
        if !any_set {
            return Ok(None);
        }

        let require = |value: &Option<String>, flag: &str| -> Result<String> {
            value
                .clone()
                .ok_or_else(|| Error::config(format!("--{flag} is required when emailing results")))
        };

        Ok(Some(MailConfig {
            smtp_host: require(&self.smtp_host, "smtp-host")?,
            smtp_port: self.smtp_port,
            username: require(&self.smtp_username, "smtp-username")?,
            password: require(&self.smtp_password, "smtp-password")?,
            sender: require(&self.mail_from, "mail-from")?,
            recipient: require(&self.mail_to, "mail-to")?,
        }))
    }
}

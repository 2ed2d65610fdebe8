use std::net::IpAddr;
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// One access log record: a connection was handled, however it turned out.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub timestamp: DateTime<Local>,
    pub client_ip: IpAddr,
    pub method: String,
    /// The raw request target, query string included.
    pub target: String,
    pub status: u16,
}

impl AccessEntry {
    /// `<timestamp> | <clientIp> | <method> <target> | <statusCode>`,
    /// timestamp at second resolution.
    pub fn format_line(&self) -> String {
        format!(
            "{} | {} | {} {} | {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.client_ip,
            self.method,
            self.target,
            self.status,
        )
    }
}

/// File name for a given day's log, date-partitioned.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("access_{}.log", date.format("%Y-%m-%d"))
}

/// Appends one line per handled connection to a per-day file under the log
/// directory. Entries are never mutated or deleted. Concurrent connections
/// rely on the filesystem's atomic append for single small writes; there is
/// no in-process lock.
#[derive(Debug, Clone)]
pub struct AccessLogger {
    directory: PathBuf,
}

impl AccessLogger {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Appends the entry to today's file. Failures are reported and
    /// swallowed; logging never aborts a connection or the server.
    pub async fn append(&self, entry: &AccessEntry) {
        if let Err(e) = self.try_append(entry).await {
            warn!("access log write failed: {}", e);
        }
    }

    async fn try_append(&self, entry: &AccessEntry) -> std::io::Result<()> {
        let path = self
            .directory
            .join(log_file_name(entry.timestamp.date_naive()));

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await?;

        // One write per line keeps the append atomic on the platforms we
        // target.
        file.write_all(entry.format_line().as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> AccessEntry {
        AccessEntry {
            timestamp: Local.with_ymd_and_hms(2026, 8, 31, 14, 30, 5).unwrap(),
            client_ip: "127.0.0.1".parse().unwrap(),
            method: "GET".to_string(),
            target: "/index.html?lang=es".to_string(),
            status: 200,
        }
    }

    #[test]
    fn line_format_has_pipe_separated_fields() {
        let line = sample_entry().format_line();
        assert_eq!(
            line,
            "2026-08-31 14:30:05 | 127.0.0.1 | GET /index.html?lang=es | 200\n"
        );
    }

    #[test]
    fn file_name_is_date_partitioned() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(log_file_name(date), "access_2026-08-31.log");
    }
}

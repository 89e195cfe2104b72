use std::io::Write;

use flexi_logger::{DeferredNow, LoggerHandle, Record};

use crate::common::*;

#[doc = "Log line format: [timestamp] [LEVEL] [module] message"]
fn log_format(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        write,
        "[{}] [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

#[doc = "전역 로거설정"]
/// Level comes from `RUST_LOG` (default `info`). Logs go to stdout and to `logs/`,
/// rotated daily with the last 10 files kept.
///
/// # Returns
/// * anyhow::Result<LoggerHandle> - the handle must stay alive for the lifetime of the process
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")
        .map_err(|e| anyhow!("[set_global_logger] invalid log spec: {:?}", e))?
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("keyword_trend_api"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format(log_format)
        .duplicate_to_stdout(Duplicate::All)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] failed to start logger: {:?}", e))?;

    Ok(handle)
}

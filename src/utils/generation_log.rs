//! 内容生成日志
//!
//! 记录每次生成由谁提供（远程模型或 mock）以及回退原因：
//! 累计到内存计数器，可选地追加到 JSONL 文件，便于排查为什么用户拿到了 mock 内容。

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::services::content::{FallbackReason, Operation, ServedMode};

/// 日志文件名
const LOG_FILE_NAME: &str = "generation_log.jsonl";

/// 生成记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// 记录 ID
    pub id: String,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
    /// 操作类型
    pub operation: Operation,
    /// 内容来源
    pub served: ServedMode,
    /// 回退原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// 持续时间（毫秒）
    pub duration_ms: u64,
    /// 返回条目数（文本为 1）
    pub items: usize,
    /// 输入预览
    pub input_preview: String,
}

impl GenerationRecord {
    /// 开始一条记录，结果字段由 [`GenerationRecord::finish`] 填写
    pub fn start(operation: Operation, input: &str) -> (Self, Instant) {
        let record = Self {
            id: Uuid::new_v4().to_string()[..8].to_string(),
            timestamp: Utc::now(),
            operation,
            served: ServedMode::Live,
            fallback_reason: None,
            error_message: None,
            duration_ms: 0,
            items: 0,
            input_preview: truncate(input, 200),
        };
        (record, Instant::now())
    }

    /// 填写结果
    pub fn finish(
        mut self,
        start_time: Instant,
        served: ServedMode,
        fallback: Option<(FallbackReason, String)>,
        items: usize,
    ) -> Self {
        self.served = served;
        self.duration_ms = start_time.elapsed().as_millis() as u64;
        self.items = items;
        if let Some((reason, message)) = fallback {
            self.fallback_reason = Some(reason);
            self.error_message = Some(truncate(&message, 500));
        }
        self
    }
}

/// 累计统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub live_served: u64,
    pub mock_served: u64,
    pub configuration_missing: u64,
    pub remote_call_failed: u64,
    pub response_parse_failed: u64,
}

impl GenerationStats {
    fn add(&mut self, record: &GenerationRecord) {
        match record.served {
            ServedMode::Live => self.live_served += 1,
            ServedMode::Mock => self.mock_served += 1,
        }
        match record.fallback_reason {
            Some(FallbackReason::ConfigurationMissing) => self.configuration_missing += 1,
            Some(FallbackReason::RemoteCallFailed) => self.remote_call_failed += 1,
            Some(FallbackReason::ResponseParseFailed) => self.response_parse_failed += 1,
            None => {}
        }
    }
}

/// 截断字符串（按字符）
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// 已打开的日志文件及其当前行数
struct LogFile {
    file: File,
    lines: usize,
}

/// 生成日志
pub struct GenerationJournal {
    log_path: Option<PathBuf>,
    max_entries: usize,
    file: Mutex<Option<LogFile>>,
    stats: Mutex<GenerationStats>,
}

impl GenerationJournal {
    /// 创建日志；`log_dir` 为 None 时只保留内存统计
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        let log_path = log_dir.and_then(|dir| match fs::create_dir_all(&dir) {
            Ok(()) => Some(dir.join(LOG_FILE_NAME)),
            Err(e) => {
                warn!("Cannot create journal dir {}: {}", dir.display(), e);
                None
            }
        });

        Self {
            log_path,
            max_entries: 1000,
            file: Mutex::new(None),
            stats: Mutex::new(GenerationStats::default()),
        }
    }

    /// 仅内存统计
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    /// 日志文件路径
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// 当前统计快照
    pub fn stats(&self) -> GenerationStats {
        self.stats.lock().clone()
    }

    /// 记录一次生成
    pub fn record(&self, record: GenerationRecord) {
        debug!(
            id = %record.id,
            served = record.served.as_str(),
            reason = record.fallback_reason.map(FallbackReason::as_str),
            duration_ms = record.duration_ms,
            items = record.items,
            "Generation {:?} finished", record.operation
        );
        self.stats.lock().add(&record);
        if self.log_path.is_some() {
            self.write_entry(&record);
        }
    }

    /// 写入日志条目
    ///
    /// 行数记在内存里，只有超过上限加上余量时才读回文件裁剪
    fn write_entry(&self, entry: &GenerationRecord) {
        let Some(log_path) = self.log_path.as_deref() else {
            return;
        };
        let Ok(json) = serde_json::to_string(entry) else {
            return;
        };
        let mut file_guard = self.file.lock();

        // 懒加载文件，首次打开时统计已有行数
        if file_guard.is_none() {
            match OpenOptions::new().create(true).append(true).open(log_path) {
                Ok(file) => {
                    *file_guard = Some(LogFile {
                        file,
                        lines: count_lines(log_path),
                    })
                }
                Err(e) => warn!("Cannot open journal {}: {}", log_path.display(), e),
            }
        }

        let Some(log) = file_guard.as_mut() else {
            return;
        };
        if writeln!(log.file, "{}", json).and_then(|_| log.file.flush()).is_ok() {
            log.lines += 1;
        }

        if log.lines > self.max_entries + self.trim_slack() {
            // 清理会重建文件，先释放旧句柄
            *file_guard = None;
            self.trim_to_max(log_path);
        }
    }

    /// 裁剪前允许多出的行数，避免每次写入都重写文件
    fn trim_slack(&self) -> usize {
        self.max_entries / 10
    }

    /// 只保留最近的 `max_entries` 条
    fn trim_to_max(&self, log_path: &Path) {
        let Ok(file) = File::open(log_path) else {
            return;
        };
        let lines: Vec<String> = BufReader::new(file).lines().map_while(Result::ok).collect();
        if lines.len() <= self.max_entries {
            return;
        }

        let keep_lines = &lines[lines.len() - self.max_entries..];
        match File::create(log_path) {
            Ok(mut file) => {
                for line in keep_lines {
                    let _ = writeln!(file, "{}", line);
                }
            }
            Err(e) => warn!("Cannot rewrite journal {}: {}", log_path.display(), e),
        }
    }
}

/// 统计文件行数；文件不存在时为 0
fn count_lines(path: &Path) -> usize {
    File::open(path)
        .map(|file| BufReader::new(file).lines().count())
        .unwrap_or(0)
}

impl Default for GenerationJournal {
    fn default() -> Self {
        Self::in_memory()
    }
}

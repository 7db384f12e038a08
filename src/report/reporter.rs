// src/report/reporter.rs
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

/// Sink for the human-readable check report.
///
/// Each call carries one block: a single line, or a multi-line block such as
/// the headers listing. Blocks are written in the order they are emitted.
#[async_trait]
pub trait Reporter: Send + Sync {
    async fn emit(&self, block: &str);
}

/// Writes report blocks to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Reporter for ConsoleReporter {
    async fn emit(&self, block: &str) {
        let mut stdout = tokio::io::stdout();
        let mut line = String::with_capacity(block.len() + 1);
        line.push_str(block);
        line.push('\n');

        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            warn!("Failed to write report to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush().await {
            warn!("Failed to flush stdout: {}", e);
        }
    }
}

/// Keeps every emitted block in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    blocks: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn blocks(&self) -> Vec<String> {
        self.blocks.lock().await.clone()
    }

    /// Number of emitted blocks starting with `prefix`.
    pub async fn count_prefixed(&self, prefix: &str) -> usize {
        self.blocks
            .lock()
            .await
            .iter()
            .filter(|block| block.starts_with(prefix))
            .count()
    }

    pub async fn clear(&self) {
        self.blocks.lock().await.clear();
    }
}

#[async_trait]
impl Reporter for MemoryReporter {
    async fn emit(&self, block: &str) {
        self.blocks.lock().await.push(block.to_string());
    }
}

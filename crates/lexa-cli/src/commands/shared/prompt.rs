use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

/// Line reader over stdin for interactive commands.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `label` on stderr and read one trimmed line. `None` at EOF.
    pub async fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(label.as_bytes()).await?;
        stderr.flush().await?;
        let line = self
            .lines
            .next_line()
            .await
            .context("failed to read from stdin")?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    /// Like [`Self::ask`] but EOF is an error.
    pub async fn require(&mut self, label: &str) -> anyhow::Result<String> {
        self.ask(label)
            .await?
            .ok_or_else(|| anyhow::anyhow!("stdin closed while waiting for input"))
    }
}

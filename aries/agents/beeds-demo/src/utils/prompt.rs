use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::AgentResult;

/// Line oriented console used by the demo roles. Generic over the streams so
/// the role flows can be driven from scripted input.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Repeat,
    Exit,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub async fn print(&mut self, text: &str) -> AgentResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `question` and reads one line. Returns `None` once the input is
    /// exhausted.
    pub async fn ask(&mut self, question: &str) -> AgentResult<Option<String>> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Like [`Prompt::ask`], but an answer opening a JSON object keeps reading
    /// lines until its braces balance, so pretty printed JSON pasted over
    /// several lines arrives as one answer.
    pub async fn ask_block(&mut self, question: &str) -> AgentResult<Option<String>> {
        let Some(first) = self.ask(question).await? else {
            return Ok(None);
        };
        if !first.starts_with('{') {
            return Ok(Some(first));
        }

        let mut braces = BraceBalance::default();
        braces.feed(&first);
        let mut block = first;
        while braces.is_open() {
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                break;
            }
            braces.feed(&line);
            block.push('\n');
            block.push_str(line.trim_end());
        }
        Ok(Some(block.trim().to_owned()))
    }

    /// Shows `menu` until the answer is `repeat_key` or `X`. Exhausted input
    /// counts as exit.
    pub async fn menu(&mut self, menu: &str, repeat_key: &str) -> AgentResult<MenuChoice> {
        loop {
            match self.ask(menu).await? {
                None => return Ok(MenuChoice::Exit),
                Some(answer) if answer.eq_ignore_ascii_case("x") => return Ok(MenuChoice::Exit),
                Some(answer) if answer == repeat_key => return Ok(MenuChoice::Repeat),
                Some(answer) => {
                    warn!("Unknown menu option {:?}", answer);
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Running `{`/`}` depth of JSON text. Braces inside string literals don't count.
#[derive(Debug, Default)]
struct BraceBalance {
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl BraceBalance {
    fn feed(&mut self, text: &str) {
        for c in text.chars() {
            if self.in_string {
                match c {
                    _ if self.escaped => self.escaped = false,
                    '\\' => self.escaped = true,
                    '"' => self.in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => self.in_string = true,
                '{' => self.depth += 1,
                '}' => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
        }
    }

    fn is_open(&self) -> bool {
        self.depth > 0
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[tokio::test]
    async fn test_ask_trims_and_detects_eof() {
        let mut prompt = Prompt::new(Cursor::new(b"  hello \n".to_vec()), Vec::new());

        assert_eq!(prompt.ask("Q: ").await.unwrap(), Some("hello".to_owned()));
        assert_eq!(prompt.ask("Q: ").await.unwrap(), None);
        assert_eq!(prompt.into_output(), b"Q: Q: ".to_vec());
    }

    #[tokio::test]
    async fn test_ask_block_joins_multi_line_json() {
        let input = "{\n  \"label\": \"a } in a string\",\n  \"nested\": {\"k\": \"\\\"{\"}\n}\nX\n";
        let mut prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let block = prompt.ask_block("Q: ").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&block).unwrap();
        assert_eq!(value["label"], "a } in a string");
        assert_eq!(value["nested"]["k"], "\"{");
        assert_eq!(prompt.ask("Q: ").await.unwrap(), Some("X".to_owned()));
        assert_eq!(prompt.into_output(), b"Q: Q: ".to_vec());
    }

    #[tokio::test]
    async fn test_ask_block_passes_single_lines_through() {
        let input = "http://172.17.0.1:8020/?oob=abc\n{\"a\":1}\n{\"unterminated\":\n";
        let mut prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        assert_eq!(
            prompt.ask_block("Q: ").await.unwrap(),
            Some("http://172.17.0.1:8020/?oob=abc".to_owned())
        );
        assert_eq!(prompt.ask_block("Q: ").await.unwrap(), Some(r#"{"a":1}"#.to_owned()));
        assert_eq!(
            prompt.ask_block("Q: ").await.unwrap(),
            Some(r#"{"unterminated":"#.to_owned())
        );
        assert_eq!(prompt.ask_block("Q: ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_menu_skips_unknown_options() {
        let mut prompt = Prompt::new(Cursor::new(b"7\n4\nx\n".to_vec()), Vec::new());

        assert_eq!(prompt.menu("> ", "4").await.unwrap(), MenuChoice::Repeat);
        assert_eq!(prompt.menu("> ", "4").await.unwrap(), MenuChoice::Exit);
        assert_eq!(prompt.menu("> ", "4").await.unwrap(), MenuChoice::Exit);
    }
}

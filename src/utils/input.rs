use crate::utils::error::Result;
use std::io::BufRead;

/// 讀取第一個以空白分隔的 token 作為 CEP，不做格式檢查
///
/// Blank lines before the token are skipped. Reaching end of input without a
/// token yields an empty string.
pub fn read_cep<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            tracing::debug!("End of input reached before any CEP was typed");
            return Ok(String::new());
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

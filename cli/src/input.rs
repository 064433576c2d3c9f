use anyhow::{anyhow, Context, Result};
use search_core::Rating;
use std::io::BufRead;

/// Next line without its trailing newline; `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn require_line<R: BufRead>(reader: &mut R, what: &str) -> Result<String> {
    read_line(reader)?.ok_or_else(|| anyhow!("unexpected end of input while reading {what}"))
}

pub fn read_line_with_number<R: BufRead>(reader: &mut R) -> Result<usize> {
    let line = require_line(reader, "a number")?;
    line.trim().parse().with_context(|| format!("expected a number, got {line:?}"))
}

/// A ratings line: the count followed by that many integers.
pub fn read_ratings<R: BufRead>(reader: &mut R) -> Result<Vec<Rating>> {
    let line = require_line(reader, "ratings")?;
    let mut fields = line.split_whitespace();
    let count: usize = fields
        .next()
        .ok_or_else(|| anyhow!("empty ratings line"))?
        .parse()
        .context("invalid rating count")?;
    let ratings = fields
        .map(|f| f.parse::<Rating>().with_context(|| format!("invalid rating {f:?}")))
        .collect::<Result<Vec<_>>>()?;
    if ratings.len() != count {
        return Err(anyhow!("expected {count} ratings, got {}", ratings.len()));
    }
    Ok(ratings)
}

pub fn read_document<R: BufRead>(reader: &mut R) -> Result<(String, Vec<Rating>)> {
    let text = require_line(reader, "document text")?;
    let ratings = read_ratings(reader)?;
    Ok((text, ratings))
}

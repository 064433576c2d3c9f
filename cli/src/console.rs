use crate::input::{read_document, read_line, read_line_with_number};
use anyhow::Result;
use search_core::{
    paginate, DocId, DocumentStatus, RequestQueue, RequestQueueConfig, SearchConfig, SearchServer,
    StopWords,
};
use std::io::{BufRead, Write};

pub struct ConsoleSettings {
    pub search: SearchConfig,
    pub queue: RequestQueueConfig,
    pub page_size: usize,
}

/// Build a server from the line-based input format, then answer every
/// remaining line as a query.
pub fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W, settings: &ConsoleSettings) -> Result<()> {
    let stop_words = StopWords::from_text(&read_line(reader)?.unwrap_or_default())?;
    let mut server = SearchServer::with_config(stop_words, settings.search);

    let count = read_line_with_number(reader)?;
    for id in 0..count {
        let (text, ratings) = read_document(reader)?;
        server.add_document(DocId::try_from(id)?, &text, DocumentStatus::Active, &ratings)?;
    }
    tracing::info!(documents = server.document_count(), "index ready");

    let mut queue = RequestQueue::with_config(&server, settings.queue);
    while let Some(raw_query) = read_line(reader)? {
        if raw_query.trim().is_empty() {
            continue;
        }
        match queue.add_find_request(&raw_query) {
            Ok(results) => {
                for (n, page) in paginate(&results, settings.page_size)?.iter().enumerate() {
                    if n > 0 {
                        writeln!(out, "Page break")?;
                    }
                    for document in page.iter() {
                        writeln!(out, "{document}")?;
                    }
                }
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    writeln!(out, "Empty requests: {}", queue.no_result_requests())?;
    Ok(())
}

//! NDJSON Event Stream
//!
//! Turns a byte stream of newline-delimited stream members into an ordered
//! `AgentEventStream`. Lines are split on raw bytes, so a multi-byte
//! character cut across two network chunks is reassembled before decoding.

use std::collections::VecDeque;
use std::fmt::Display;
use std::pin::Pin;

use agent_relay_core::streaming::{AdapterError, AgentStreamEvent, StreamAdapter};
use futures_util::{stream, Stream, StreamExt};

use crate::types::{AgentEventStream, TransportError, TransportResult};

struct LineState<S, A> {
    inner: Pin<Box<S>>,
    adapter: A,
    buffer: Vec<u8>,
    pending: VecDeque<TransportResult<AgentStreamEvent>>,
    finished: bool,
}

impl<S, A: StreamAdapter> LineState<S, A> {
    /// Adapt every complete line in the buffer, then drop the consumed
    /// prefix in a single drain.
    fn drain_complete_lines(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let mut consumed = 0;
        while let Some(pos) = buffer[consumed..].iter().position(|b| *b == b'\n') {
            let end = consumed + pos;
            self.adapt_line(&buffer[consumed..end]);
            consumed = end + 1;
            if self.finished {
                return;
            }
        }
        self.buffer = buffer;
        self.buffer.drain(..consumed);
    }

    fn drain_remainder(&mut self) {
        if !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.adapt_line(&line);
        }
    }

    fn adapt_line(&mut self, line: &[u8]) {
        let result = std::str::from_utf8(line)
            .map_err(|e| AdapterError::InvalidFormat(format!("line is not UTF-8: {}", e)))
            .and_then(|text| self.adapter.adapt(text));

        match result {
            Ok(events) => self.pending.extend(events.into_iter().map(Ok)),
            Err(err) => {
                tracing::warn!(
                    adapter = self.adapter.provider_name(),
                    "Failed to adapt stream line: {}",
                    err
                );
                self.pending.push_back(Err(err.into()));
                self.buffer.clear();
                self.finished = true;
            }
        }
    }
}

/// Adapt a byte stream of NDJSON members into typed agent events.
///
/// The first byte-level or adapter error is yielded as the final item.
pub fn ndjson_events<S, B, E, A>(bytes: S, adapter: A) -> AgentEventStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
    A: StreamAdapter + 'static,
{
    let state = LineState {
        inner: Box::pin(bytes),
        adapter,
        buffer: Vec::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.finished {
                return None;
            }
            match state.inner.next().await {
                Some(Ok(chunk)) => {
                    state.buffer.extend_from_slice(chunk.as_ref());
                    state.drain_complete_lines();
                }
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(TransportError::network(e.to_string())), state));
                }
                None => {
                    state.finished = true;
                    state.drain_remainder();
                }
            }
        }
    }))
}

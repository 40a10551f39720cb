//! Agent Relay Citations
//!
//! Turns one agent invocation's interleaved event stream into a single
//! citation-annotated answer.
//!
//! ## Pipeline
//!
//! - `reader` - Folds stream events into text, raw output and references
//! - `dedup` - Numbers unique source locations in first-seen order
//! - `parser` - Splits raw structured output into answer segments
//! - `rewriter` - Appends ordinal citation markers and detects live data
//! - `aggregate` - Runs the stages above over one invocation's artifacts
//! - `assembler` - Shapes the outbound payload

pub mod aggregate;
pub mod assembler;
pub mod dedup;
pub mod parser;
pub mod reader;
pub mod rewriter;

pub use aggregate::{aggregate, AggregatedResult};
pub use assembler::{assemble, RelayResponse};
pub use dedup::{CitationIndex, CitationMap, UNKNOWN_LOCATION};
pub use parser::{parse_structured_output, AnswerSegment, ParsedAnswer, LIVE_DATA_INDICATORS};
pub use reader::{consume_stream, RetrievalReference, StreamArtifacts, StreamReader};
pub use rewriter::{rewrite_segments, RewrittenAnswer};

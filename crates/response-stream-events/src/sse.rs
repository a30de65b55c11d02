//! Server-sent-events framing in front of the classifier.
//!
//! Splits raw bytes into SSE frames and classifies the `data:` payload of
//! each one, in arrival order. Only an incomplete trailing frame is buffered.
use std::collections::VecDeque;

use futures::StreamExt as _;
use futures::stream;

use crate::decoder::Classifier;
use crate::errors::{ClassifyError, StreamError};
use crate::event::ResponseStreamEvent;

/// Payload the server sends after the last event of some streams.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One SSE frame: optional `event:` name and the joined `data:` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    pub event: Option<String>,
    pub data: String,
}

impl SseFrame {
    /// True when the frame carries no document (empty or `[DONE]`).
    pub fn is_empty_or_done(&self) -> bool {
        let data = self.data.trim();
        data.is_empty() || data == DONE_SENTINEL
    }
}

/// Incremental SSE frame splitter.
#[derive(Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    /// Appends `chunk` and returns every frame completed by it.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buf.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some((idx, delim_len)) = find_frame_delimiter(&self.buf) {
            let frame_bytes: Vec<u8> = self.buf.drain(..idx + delim_len).take(idx).collect();
            if let Some(frame) = parse_sse_frame(&frame_bytes) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Flushes a trailing frame that was not followed by a blank line.
    pub fn finish(&mut self) -> Option<SseFrame> {
        let rest = std::mem::take(&mut self.buf);
        parse_sse_frame(&rest)
    }
}

/// Finds the first blank line. Returns the frame length and the number of
/// delimiter bytes to drop; `\n\n`, `\n\r\n`, `\r\n\n` and `\r\n\r\n`
/// all end a frame (a trailing `\r` in the frame is trimmed by the parser).
fn find_frame_delimiter(buf: &[u8]) -> Option<(usize, usize)> {
    for (i, byte) in buf.iter().enumerate() {
        if *byte != b'\n' {
            continue;
        }
        match &buf[i + 1..] {
            [b'\n', ..] => return Some((i, 2)),
            [b'\r', b'\n', ..] => return Some((i, 3)),
            _ => {}
        }
    }
    None
}

fn parse_sse_frame(bytes: &[u8]) -> Option<SseFrame> {
    if bytes.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(bytes);
    let mut event: Option<String> = None;
    let mut data_lines: Vec<&str> = Vec::new();
    for raw_line in text.split('\n') {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("event:") {
            event = Some(rest.trim_start().to_string());
            continue;
        }
        if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    if event.is_none() && data_lines.is_empty() {
        return None;
    }
    Some(SseFrame {
        event,
        data: data_lines.join("\n"),
    })
}

/// SSE splitter plus classifier.
pub struct EventStreamDecoder {
    frames: SseDecoder,
    classifier: Classifier,
}

impl EventStreamDecoder {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            frames: SseDecoder::default(),
            classifier,
        }
    }

    /// Classifies every frame completed by `chunk`.
    ///
    /// Frames without a document are skipped. A failed frame yields an
    /// `Err` item and does not affect later frames.
    pub fn push_chunk(
        &mut self,
        chunk: &[u8],
    ) -> Vec<Result<ResponseStreamEvent, ClassifyError>> {
        let frames = self.frames.push_chunk(chunk);
        frames
            .iter()
            .filter_map(|frame| self.classify_frame(frame))
            .collect()
    }

    /// Classifies a trailing unterminated frame, if any.
    pub fn finish(&mut self) -> Option<Result<ResponseStreamEvent, ClassifyError>> {
        let frame = self.frames.finish()?;
        self.classify_frame(&frame)
    }

    fn classify_frame(
        &self,
        frame: &SseFrame,
    ) -> Option<Result<ResponseStreamEvent, ClassifyError>> {
        if frame.is_empty_or_done() {
            return None;
        }
        Some(self.classifier.classify_str(frame.data.trim()))
    }
}

/// Adapts a byte stream (for example `reqwest::Response::bytes_stream`) into
/// a stream of classified events.
///
/// Classification errors are yielded in place and the stream continues; a
/// transport error is yielded once and ends the stream.
pub fn classify_byte_stream<S, E>(
    classifier: Classifier,
    bytes_stream: S,
) -> impl futures::Stream<Item = Result<ResponseStreamEvent, StreamError>> + Send
where
    S: futures::Stream<Item = Result<bytes::Bytes, E>> + Unpin + Send,
    E: std::fmt::Display + Send,
{
    struct State<S> {
        bytes_stream: S,
        decoder: EventStreamDecoder,
        pending: VecDeque<Result<ResponseStreamEvent, StreamError>>,
        done: bool,
    }

    stream::unfold(
        State {
            bytes_stream,
            decoder: EventStreamDecoder::new(classifier),
            pending: VecDeque::new(),
            done: false,
        },
        |mut state| async move {
            loop {
                if let Some(item) = state.pending.pop_front() {
                    return Some((item, state));
                }
                if state.done {
                    return None;
                }

                match state.bytes_stream.next().await {
                    Some(Ok(chunk)) => {
                        for result in state.decoder.push_chunk(&chunk) {
                            state.pending.push_back(result.map_err(StreamError::from));
                        }
                    }
                    Some(Err(e)) => {
                        state.done = true;
                        state.pending.push_back(Err(StreamError::transport(format!(
                            "stream read failed: {e}"
                        ))));
                    }
                    None => {
                        state.done = true;
                        if let Some(result) = state.decoder.finish() {
                            state.pending.push_back(result.map_err(StreamError::from));
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::OutputTextEvent;
    use crate::event_types;

    #[test]
    fn sse_decoder_handles_partial_chunk_boundaries() {
        let mut decoder = SseDecoder::default();
        let part1 =
            b"event: response.output_text.delta\ndata: {\"type\":\"response.output_text.delta\",\"delta\":\"hel";
        let part2 = b"lo\"}\n\n";
        let frames1 = decoder.push_chunk(part1);
        assert!(frames1.is_empty());
        let frames2 = decoder.push_chunk(part2);
        assert_eq!(frames2.len(), 1);
        assert_eq!(frames2[0].event.as_deref(), Some("response.output_text.delta"));
        assert!(frames2[0].data.contains("\"delta\":\"hello\""));
    }

    #[test]
    fn sse_decoder_handles_crlf_comments_and_multiline_data() {
        let mut decoder = SseDecoder::default();
        let frames = decoder.push_chunk(b": keep-alive\r\n\r\ndata: {\"a\":\r\ndata: 1}\r\n\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].event, None);
        assert_eq!(frames[0].data, "{\"a\":\n1}");
    }

    #[test]
    fn sse_decoder_accepts_mixed_line_endings_between_frames() {
        let mut decoder = SseDecoder::default();
        let frames = decoder.push_chunk(
            b"data: {\"n\":1}\n\r\ndata: {\"n\":2}\r\n\ndata: {\"n\":3}\r\n\r\ndata: {\"n\":4}\n\n",
        );
        let data: Vec<&str> = frames.iter().map(|f| f.data.as_str()).collect();
        assert_eq!(data, ["{\"n\":1}", "{\"n\":2}", "{\"n\":3}", "{\"n\":4}"]);
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn blank_line_split_across_chunks_ends_frame() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push_chunk(b"data: {\"n\":1}\n\r").is_empty());
        let frames = decoder.push_chunk(b"\ndata: {\"n\":2}\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "{\"n\":1}");
        assert_eq!(decoder.finish().map(|f| f.data), Some("{\"n\":2}".to_string()));
    }

    #[test]
    fn finish_flushes_unterminated_frame() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push_chunk(b"data: [DONE]").is_empty());
        let frame = decoder.finish().expect("trailing frame");
        assert!(frame.is_empty_or_done());
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn event_stream_decoder_classifies_in_order_and_skips_done() {
        let mut decoder = EventStreamDecoder::new(Classifier::default());
        let transcript = concat!(
            "event: response.created\n",
            "data: {\"type\":\"response.created\",\"sequence_number\":0,\"response\":{\"id\":\"r1\",\"status\":\"in_progress\"}}\n\n",
            "event: response.output_text.delta\n",
            "data: {\"type\":\"response.output_text.delta\",\"item_id\":\"m1\",\"delta\":\"Hi\"}\n\n",
            "data: {\"type\":\"response.bogus\"}\n\n",
            "event: response.completed\n",
            "data: {\"type\":\"response.completed\",\"response\":{\"id\":\"r1\",\"status\":\"completed\"}}\n\n",
            "data: [DONE]\n\n",
        );
        let results = decoder.push_chunk(transcript.as_bytes());
        assert_eq!(results.len(), 4);
        assert!(matches!(results[0], Ok(ResponseStreamEvent::Created(_))));
        assert!(matches!(
            results[1],
            Ok(ResponseStreamEvent::OutputText(OutputTextEvent::Delta(_)))
        ));
        assert!(matches!(results[2], Err(ClassifyError::UnknownEvent { .. })));
        assert!(matches!(results[3], Ok(ResponseStreamEvent::Completed(_))));
        assert!(decoder.finish().is_none());
    }

    #[tokio::test]
    async fn byte_stream_yields_events_errors_and_stops_on_transport_failure() {
        let chunks: Vec<Result<bytes::Bytes, String>> = vec![
            Ok(bytes::Bytes::from_static(
                b"data: {\"type\":\"response.output_text.delta\",\"item_id\":\"m1\",",
            )),
            Ok(bytes::Bytes::from_static(b"\"delta\":\"a\"}\n\ndata: not json\n\n")),
            Err("connection reset".to_string()),
            Ok(bytes::Bytes::from_static(b"data: {\"type\":\"error\",\"message\":\"late\"}\n\n")),
        ];
        let events: Vec<_> =
            classify_byte_stream(Classifier::default(), futures::stream::iter(chunks))
                .collect()
                .await;

        assert_eq!(events.len(), 3);
        match &events[0] {
            Ok(event) => assert_eq!(event.event_type(), event_types::OUTPUT_TEXT_DELTA),
            Err(e) => panic!("unexpected error {e}"),
        }
        assert!(matches!(
            events[1],
            Err(StreamError::Classify(ClassifyError::InvalidJson { .. }))
        ));
        assert!(matches!(
            events[2],
            Err(StreamError::Transport { ref message }) if message.contains("connection reset")
        ));
    }

    #[tokio::test]
    async fn byte_stream_flushes_trailing_frame_at_end() {
        let chunks: Vec<Result<bytes::Bytes, String>> = vec![Ok(bytes::Bytes::from_static(
            b"data: {\"type\":\"response.audio.done\"}",
        ))];
        let events: Vec<_> =
            classify_byte_stream(Classifier::default(), futures::stream::iter(chunks))
                .collect()
                .await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Ok(ResponseStreamEvent::Audio(_))));
    }
}

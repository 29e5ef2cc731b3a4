pub mod stream_segment;

// Decoder edge-case tests
// Run with: cargo test --lib subtitle::tests

#[cfg(test)]
mod decode_tests {
    use crate::subtitle::{compress, decode, decode_text, decompress};

    const SAMPLE_SRT: &str = "1\n00:00:10,000 --> 00:00:15,000\nHello there.\n\n2\n00:00:16,000 --> 00:00:21,000\nGeneral greeting.\n";

    #[test]
    fn test_round_trip() {
        let payload = compress("Sample (2020)", SAMPLE_SRT).unwrap();
        let text = decode(&payload).unwrap();
        assert_eq!(text, SAMPLE_SRT);
    }

    #[test]
    fn test_decompress_not_a_zip() {
        let result = decompress(b"this is definitely not a zip file");
        assert!(result.is_err());
    }

    #[test]
    fn test_decompress_empty_payload() {
        let result = decompress(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decompress_empty_archive() {
        // A zip container with zero members is still corrupt for our purposes
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let writer = zip::ZipWriter::new(&mut cursor);
            writer.finish().unwrap();
        }
        let result = decompress(&cursor.into_inner());
        assert!(result.is_err());
    }

    #[test]
    fn test_decompress_reads_first_member_only() {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("first.srt", options).unwrap();
            std::io::Write::write_all(&mut writer, b"first contents").unwrap();
            writer.start_file("second.srt", options).unwrap();
            std::io::Write::write_all(&mut writer, b"second contents").unwrap();
            writer.finish().unwrap();
        }
        let bytes = decompress(&cursor.into_inner()).unwrap();
        assert_eq!(bytes, b"first contents");
    }

    #[test]
    fn test_decode_text_utf8() {
        assert_eq!(decode_text("héllo".as_bytes()), "héllo");
    }

    #[test]
    fn test_decode_text_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1/Windows-1252 but invalid UTF-8
        let bytes = vec![b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_text(&bytes), "café");
    }

    #[test]
    fn test_decode_is_deterministic() {
        let payload = compress("Sample", SAMPLE_SRT).unwrap();
        assert_eq!(decode(&payload).unwrap(), decode(&payload).unwrap());
    }
}

#[cfg(test)]
mod parse_tests {
    use crate::subtitle::{clean_text, parse_blocks, timestamp_of_line};

    #[test]
    fn test_parse_blocks_basic() {
        let text = "1\n00:00:10,000 --> 00:00:15,000\nFirst line.\n\n2\n00:00:16,000 --> 00:00:21,000\nSecond line.\n";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start, "00:00:10,000");
        assert_eq!(blocks[0].end, "00:00:15,000");
        assert_eq!(blocks[0].text, "First line.");
        assert_eq!(blocks[1].text, "Second line.");
    }

    #[test]
    fn test_parse_blocks_multiline_dialogue() {
        let text = "1\n00:00:10,000 --> 00:00:15,000\nTwo lines\nof dialogue.\n";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Two lines of dialogue.");
    }

    #[test]
    fn test_parse_blocks_missing_trailing_blank() {
        let text = "1\n00:00:10,000 --> 00:00:15,000\nNo trailing blank line";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "No trailing blank line");
    }

    #[test]
    fn test_parse_blocks_empty_text() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("just some prose, no cues").is_empty());
    }

    #[test]
    fn test_timestamp_of_line() {
        assert_eq!(
            timestamp_of_line("00:01:23,456 --> 00:01:25,789"),
            Some("00:01:23,456".to_string())
        );
        assert_eq!(timestamp_of_line("plain dialogue line"), None);
    }

    #[test]
    fn test_clean_text_strips_srt_noise() {
        let text = "1\n00:00:10,000 --> 00:00:15,000\n<i>Hello</i> there.\n\n2\n00:00:16,000 --> 00:00:21,000\nGeneral   greeting.\n";
        assert_eq!(clean_text(text), "Hello there. General greeting.");
    }

    #[test]
    fn test_clean_text_keeps_inline_numbers() {
        // Numbers inside dialogue are not cue counters
        let text = "00:00:10,000 --> 00:00:15,000\nRoom 101 is down the hall.\n";
        assert_eq!(clean_text(text), "Room 101 is down the hall.");
    }
}

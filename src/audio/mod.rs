//! Audio payload helpers.

mod wav;

pub use wav::{WavError, merge_wav, wav_duration_ms};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SynthesisResult;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use std::io::Cursor;

    fn spec(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    fn wav(samples: &[i16], sample_rate: u32) -> SynthesisResult {
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec(sample_rate)).unwrap();
            for s in samples {
                writer.write_sample(*s).unwrap();
            }
            writer.finalize().unwrap();
        }
        SynthesisResult {
            audio: bytes,
            content_type: Some("audio/wav".to_string()),
        }
    }

    #[test]
    fn test_wav_duration() {
        let one_second = wav(&vec![0i16; 8000], 8000);
        assert_eq!(wav_duration_ms(&one_second.audio).unwrap(), 1000);

        let quarter = wav(&vec![0i16; 2000], 8000);
        assert_eq!(wav_duration_ms(&quarter.audio).unwrap(), 250);
    }

    #[test]
    fn test_wav_duration_rejects_non_wav() {
        assert!(matches!(wav_duration_ms(b"ID3 mp3 data"), Err(WavError::Wav(_))));
    }

    #[test]
    fn test_merge_concatenates_samples() {
        let merged = merge_wav(&[wav(&[1, 2, 3], 8000), wav(&[4, 5], 8000)]).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(merged)).unwrap();
        assert_eq!(reader.spec(), spec(8000));
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_single_part() {
        let merged = merge_wav(&[wav(&[7, 8], 22050)]).unwrap();
        assert_eq!(wav_duration_ms(&merged).unwrap(), 0);

        let mut reader = hound::WavReader::new(Cursor::new(merged)).unwrap();
        assert_eq!(reader.samples::<i16>().count(), 2);
    }

    #[test]
    fn test_merge_empty() {
        assert!(matches!(merge_wav(&[]), Err(WavError::Empty)));
    }

    #[test]
    fn test_merge_rejects_mismatched_rates() {
        let result = merge_wav(&[wav(&[1], 8000), wav(&[2], 16000)]);
        assert!(matches!(
            result,
            Err(WavError::FormatMismatch { index: 1, .. })
        ));
    }
}

//! WAV inspection and concatenation.

use std::io::{Cursor, Read, Seek, Write};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use thiserror::Error;

use crate::engine::SynthesisResult;

/// Errors that can occur while processing WAV payloads.
#[derive(Error, Debug)]
pub enum WavError {
    #[error("No audio to merge")]
    Empty,

    #[error("Audio part {index} has format {found:?}, expected {expected:?}")]
    FormatMismatch {
        index: usize,
        expected: WavSpec,
        found: WavSpec,
    },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Duration of a WAV payload, in milliseconds.
pub fn wav_duration_ms(bytes: &[u8]) -> Result<u64, WavError> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    let rate = u64::from(reader.spec().sample_rate.max(1));
    Ok(u64::from(reader.duration()) * 1000 / rate)
}

/// Concatenate WAV results into a single WAV file.
///
/// Every part must share the sample rate, channel count and sample format of
/// the first part.
pub fn merge_wav(parts: &[SynthesisResult]) -> Result<Vec<u8>, WavError> {
    let first = parts.first().ok_or(WavError::Empty)?;
    let spec = WavReader::new(Cursor::new(first.audio.as_slice()))?.spec();

    let mut out = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut out), spec)?;

        for (index, part) in parts.iter().enumerate() {
            let mut reader = WavReader::new(Cursor::new(part.audio.as_slice()))?;
            if reader.spec() != spec {
                return Err(WavError::FormatMismatch {
                    index,
                    expected: spec,
                    found: reader.spec(),
                });
            }

            match (spec.sample_format, spec.bits_per_sample) {
                (SampleFormat::Float, _) => copy_samples::<f32, _, _>(&mut reader, &mut writer)?,
                (SampleFormat::Int, bits) if bits <= 16 => {
                    copy_samples::<i16, _, _>(&mut reader, &mut writer)?
                }
                (SampleFormat::Int, _) => copy_samples::<i32, _, _>(&mut reader, &mut writer)?,
            }
        }

        writer.finalize()?;
    }

    Ok(out)
}

fn copy_samples<S, R, W>(
    reader: &mut WavReader<R>,
    writer: &mut WavWriter<W>,
) -> Result<(), WavError>
where
    S: hound::Sample,
    R: Read,
    W: Write + Seek,
{
    for sample in reader.samples::<S>() {
        writer.write_sample(sample?)?;
    }
    Ok(())
}

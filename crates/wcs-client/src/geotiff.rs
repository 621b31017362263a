//! GeoTIFF decoding for coverage responses.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult, Limits};

use soil_common::RasterLayer;

use crate::error::WcsResult;

/// Decode a GeoTIFF byte buffer into a raster layer.
///
/// The service responds with single-band GEOTIFF_INT16 coverages; other
/// integer and float sample formats are accepted and widened to f32.
/// Values pass through unmodified, including any nodata sentinels, so
/// downstream aggregation sees exactly what the server sent.
pub fn decode_layer(bytes: &[u8]) -> WcsResult<RasterLayer> {
    let mut decoder = Decoder::new(Cursor::new(bytes))?;

    // Full-extent responses are 4000x6400 int16, ~49 MB decoded
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 256 * 1024 * 1024;
    limits.intermediate_buffer_size = 256 * 1024 * 1024;
    decoder = decoder.with_limits(limits);

    let (width, height) = decoder.dimensions()?;

    let data: Vec<f32> = match decoder.read_image()? {
        DecodingResult::I16(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U16(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::F32(data) => data,
        DecodingResult::F64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U8(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I8(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I64(data) => data.into_iter().map(|v| v as f32).collect(),
    };

    Ok(RasterLayer::from_data(
        data,
        width as usize,
        height as usize,
    )?)
}

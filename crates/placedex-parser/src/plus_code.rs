//! Open Location Code ("Plus Code") encoding.
//!
//! Encoding runs on integers scaled to the finest precision of a 15-digit
//! code, which keeps digit boundaries exact and avoids the floating-point
//! drift of repeated division.

/// Produces a short geocode for a coordinate pair.
pub trait PlusCodeEncoder {
    fn encode(&self, latitude: f64, longitude: f64, code_length: usize) -> String;
}

const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";
const ENCODING_BASE: i64 = 20;
const SEPARATOR: char = '+';
const SEPARATOR_POSITION: usize = 8;
const PADDING: char = '0';

const MIN_CODE_LENGTH: usize = 2;
const PAIR_CODE_LENGTH: usize = 10;
const GRID_CODE_LENGTH: usize = 5;
const MAX_CODE_LENGTH: usize = PAIR_CODE_LENGTH + GRID_CODE_LENGTH;

const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;

/// Resolution of the pair section in units per degree (`20^3`).
const PAIR_PRECISION: i64 = 8_000;
/// `GRID_ROWS ^ GRID_CODE_LENGTH`
const GRID_LAT_FULL_VALUE: i64 = 3_125;
/// `GRID_COLUMNS ^ GRID_CODE_LENGTH`
const GRID_LNG_FULL_VALUE: i64 = 1_024;
const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * GRID_LAT_FULL_VALUE;
const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * GRID_LNG_FULL_VALUE;

const LATITUDE_MAX: f64 = 90.0;
const LONGITUDE_MAX: f64 = 180.0;

/// The standard Open Location Code algorithm.
///
/// Latitude is clipped to `[-90, 90]` and longitude wrapped into
/// `[-180, 180)`. Lengths are clamped to `2..=15`; odd lengths below 10 are
/// rounded up since the pair section only encodes whole pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLocationCode;

impl PlusCodeEncoder for OpenLocationCode {
    fn encode(&self, latitude: f64, longitude: f64, code_length: usize) -> String {
        encode(latitude, longitude, code_length)
    }
}

/// Encode a coordinate into a Plus Code of `code_length` significant digits.
#[must_use]
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code_length = code_length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH);
    if code_length < PAIR_CODE_LENGTH && code_length % 2 == 1 {
        code_length += 1;
    }

    let lat_span = 2 * 90 * FINAL_LAT_PRECISION;
    let lng_span = 2 * 180 * FINAL_LNG_PRECISION;

    let clipped_lat = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    let mut lat_val = scale(clipped_lat, LATITUDE_MAX, FINAL_LAT_PRECISION).clamp(0, lat_span - 1);
    let mut lng_val = scale(longitude, LONGITUDE_MAX, FINAL_LNG_PRECISION).rem_euclid(lng_span);

    let mut digits = [0u8; MAX_CODE_LENGTH];

    if code_length > PAIR_CODE_LENGTH {
        for i in 0..GRID_CODE_LENGTH {
            let row = lat_val % GRID_ROWS;
            let col = lng_val % GRID_COLUMNS;
            digits[MAX_CODE_LENGTH - 1 - i] = symbol(row * GRID_COLUMNS + col);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_LAT_FULL_VALUE;
        lng_val /= GRID_LNG_FULL_VALUE;
    }

    for i in 0..PAIR_CODE_LENGTH / 2 {
        digits[PAIR_CODE_LENGTH - 1 - i * 2] = symbol(lng_val % ENCODING_BASE);
        digits[PAIR_CODE_LENGTH - 2 - i * 2] = symbol(lat_val % ENCODING_BASE);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }

    let mut code = String::with_capacity(code_length.max(SEPARATOR_POSITION) + 1);
    for (i, &d) in digits.iter().take(code_length).enumerate() {
        if i == SEPARATOR_POSITION {
            code.push(SEPARATOR);
        }
        code.push(char::from(d));
    }
    if code_length < SEPARATOR_POSITION {
        code.extend(std::iter::repeat_n(PADDING, SEPARATOR_POSITION - code_length));
    }
    if code_length <= SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }
    code
}

/// Shift `degrees` to a non-negative range and scale it to integer units.
///
/// Rounds at six decimal places before flooring so that values like
/// `20.3700625` do not fall one unit short through float error.
// The result is bounded by the span of the coordinate range times the final
// precision, far inside i64; NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
fn scale(degrees: f64, max: f64, precision: i64) -> i64 {
    #[allow(clippy::cast_precision_loss)]
    let precision = precision as f64;
    (((degrees + max) * precision * 1e6).round() / 1e6).floor() as i64
}

// Every caller reduces its argument modulo 20 first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn symbol(index: i64) -> u8 {
    ALPHABET[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_origin() {
        assert_eq!(encode(0.0, 0.0, 10), "6FG22222+22");
    }

    #[test]
    fn encodes_grid_refinement() {
        assert_eq!(encode(0.0, 0.0, 11), "6FG22222+222");
    }

    #[test]
    fn pads_short_codes() {
        assert_eq!(encode(0.0, 0.0, 4), "6FG20000+");
        assert_eq!(encode(0.0, 0.0, 8), "6FG22222+");
    }

    #[test]
    fn clips_north_pole() {
        assert_eq!(encode(90.0, 1.0, 4), "CFX30000+");
    }

    #[test]
    fn wraps_longitude() {
        assert_eq!(encode(10.0, 190.0, 10), encode(10.0, -170.0, 10));
    }

    #[test]
    fn rounds_odd_short_lengths_up() {
        assert_eq!(encode(0.0, 0.0, 3), encode(0.0, 0.0, 4));
    }

    #[test]
    fn encoder_trait_uses_requested_length() {
        let code = OpenLocationCode.encode(40.7128, -74.0060, 10);
        assert_eq!(code.len(), 11);
        assert_eq!(code.find('+'), Some(8));
    }
}

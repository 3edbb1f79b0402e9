//! Icon validation.

use serde_json::Number;

use crate::error::IconError;
use crate::scene::ICON_BYTES;

/// Validates a scene icon: exactly 32 entries, each an integer in 0-255.
///
/// Entries arrive as raw JSON numbers so that a non-integer element can be
/// reported with its index and value instead of surfacing as an opaque
/// parse failure. On success the icon comes back unchanged, as bytes.
///
/// Substituting [`crate::scene::DEFAULT_ICON`] for a missing icon is the
/// scene builder's job, not this function's.
pub fn validate_icon(icon: &[Number]) -> Result<[u8; ICON_BYTES], IconError> {
    if icon.len() != ICON_BYTES {
        return Err(IconError::WrongLength { got: icon.len() });
    }

    let mut bytes = [0u8; ICON_BYTES];
    for (index, value) in icon.iter().enumerate() {
        let Some(v) = value.as_i64() else {
            return Err(IconError::NotAnInteger {
                index,
                value: value.to_string(),
            });
        };
        if !(0..=255).contains(&v) {
            return Err(IconError::OutOfRange { index, value: v });
        }
        bytes[index] = v as u8;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DEFAULT_ICON;
    use pretty_assertions::assert_eq;

    fn numbers(values: &[i64]) -> Vec<Number> {
        values.iter().map(|&v| Number::from(v)).collect()
    }

    #[test]
    fn valid_icon_passes_unchanged() {
        let input: Vec<i64> = DEFAULT_ICON.iter().map(|&b| i64::from(b)).collect();
        let validated = validate_icon(&numbers(&input)).unwrap();
        assert_eq!(validated, DEFAULT_ICON);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let short = numbers(&[0; 31]);
        assert_eq!(
            validate_icon(&short),
            Err(IconError::WrongLength { got: 31 })
        );

        let long = numbers(&[0; 33]);
        assert_eq!(validate_icon(&long), Err(IconError::WrongLength { got: 33 }));
    }

    #[test]
    fn out_of_range_byte_names_index_and_value() {
        let mut values = vec![0i64; ICON_BYTES];
        values[5] = 256;
        assert_eq!(
            validate_icon(&numbers(&values)),
            Err(IconError::OutOfRange {
                index: 5,
                value: 256
            })
        );

        values[5] = -1;
        assert_eq!(
            validate_icon(&numbers(&values)),
            Err(IconError::OutOfRange {
                index: 5,
                value: -1
            })
        );
    }

    #[test]
    fn non_integer_byte_is_rejected() {
        let mut values = numbers(&[0i64; ICON_BYTES]);
        values[3] = Number::from_f64(12.5).unwrap();
        let err = validate_icon(&values).unwrap_err();
        assert_eq!(
            err,
            IconError::NotAnInteger {
                index: 3,
                value: "12.5".to_string()
            }
        );
    }
}

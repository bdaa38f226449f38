use crate::error::CircleError;
use itertools::Itertools;

/// Parses a cup labelling like `"389125467"`: one digit per cup, each in
/// `1-9`, no repeats.
pub fn parse_labels(input: &str) -> Result<Vec<u32>, CircleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CircleError::InvalidInput(
            "no cup labels supplied".to_owned(),
        ));
    }

    let labels = trimmed
        .chars()
        .map(|ch| {
            ch.to_digit(10).filter(|&d| d >= 1).ok_or_else(|| {
                CircleError::InvalidInput(format!(
                    "`{}` is not a cup label",
                    ch
                ))
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if let Some(dup) = labels.iter().duplicates().next() {
        return Err(CircleError::InvalidInput(format!(
            "cup {} appears twice",
            dup
        )));
    }

    Ok(labels)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_digit_string() {
        assert_eq!(
            parse_labels("389125467").unwrap(),
            [3, 8, 9, 1, 2, 5, 4, 6, 7]
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_labels(" 312\n").unwrap(), [3, 1, 2]);
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            parse_labels("3012"),
            Err(CircleError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(
            parse_labels("12x4"),
            Err(CircleError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_repeats() {
        assert!(matches!(
            parse_labels("1231"),
            Err(CircleError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_labels("  \n"),
            Err(CircleError::InvalidInput(_))
        ));
    }
}

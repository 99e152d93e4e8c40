use crate::error::CoreError;

/// Columns A to D.
pub const DEFAULT_COLUMNS: [usize; 4] = [0, 1, 2, 3];
/// Widest sheet a spreadsheet application will produce (`XFD`).
pub const MAX_COLUMNS: usize = 16_384;

pub fn validate_columns(columns: &[usize]) -> Result<Vec<usize>, CoreError> {
    if columns.is_empty() {
        return Err(CoreError::EmptyColumns);
    }

    let mut out = Vec::with_capacity(columns.len());
    for &column in columns {
        if column >= MAX_COLUMNS {
            return Err(CoreError::ColumnOutOfRange(column));
        }
        if out.contains(&column) {
            return Err(CoreError::DuplicateColumn(column));
        }
        out.push(column);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{validate_columns, DEFAULT_COLUMNS, MAX_COLUMNS};
    use crate::error::CoreError;

    #[test]
    fn validate_columns_keeps_order() {
        assert_eq!(validate_columns(&[3, 0, 2]), Ok(vec![3, 0, 2]));
        assert_eq!(validate_columns(&DEFAULT_COLUMNS), Ok(DEFAULT_COLUMNS.to_vec()));
    }

    #[test]
    fn validate_columns_rejects_bad_input() {
        assert_eq!(validate_columns(&[]), Err(CoreError::EmptyColumns));
        assert_eq!(validate_columns(&[1, 1]), Err(CoreError::DuplicateColumn(1)));
        assert_eq!(
            validate_columns(&[MAX_COLUMNS]),
            Err(CoreError::ColumnOutOfRange(MAX_COLUMNS))
        );
    }
}

use crate::core::library::{LibraryError, LibraryResult};

const ISBN10_LEN: usize = 10;
const ISBN13_LEN: usize = 13;
const BOOKLAND_PREFIXES: [&str; 2] = ["978", "979"];

/// Normalizes a typed or scanned ISBN/EAN code.
///
/// Every character other than a decimal digit or `X`/`x` is dropped. The
/// remainder must be an ISBN-10 (nine digits followed by a digit or `X`) or a
/// Bookland EAN-13 (thirteen digits starting with 978 or 979). Check digits
/// are not verified.
pub fn normalize_isbn(raw: &str) -> LibraryResult<String> {
    let code: String = raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    match code.len() {
        ISBN10_LEN => {
            let (body, check) = code.split_at(ISBN10_LEN - 1);
            if body.chars().all(|c| c.is_ascii_digit()) &&
                check.chars().all(|c| c.is_ascii_digit() || c == 'X') {
                Ok(code)
            } else {
                Err(invalid(raw))
            }
        }
        ISBN13_LEN => {
            if code.chars().all(|c| c.is_ascii_digit()) &&
                BOOKLAND_PREFIXES.iter().any(|p| code.starts_with(p)) {
                Ok(code)
            } else {
                Err(invalid(raw))
            }
        }
        _ => Err(invalid(raw)),
    }
}

fn invalid(raw: &str) -> LibraryError {
    LibraryError::invalid_identifier(format!("invalid isbn or barcode {:?}", raw).as_str())
}

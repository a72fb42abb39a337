//! Random access codes: 4 letters followed by 4 digits.
//!
//! Letters and digits that are easy to misread (I, O, S, Z, 0, 1, 2, 5, 6, 9)
//! are left out of the alphabets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AccessCodeError;

pub const LETTERS: [char; 22] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'T', 'U', 'V',
    'W', 'X', 'Y',
];
pub const DIGITS: [char; 4] = ['3', '4', '7', '8'];

pub const LETTER_COUNT: usize = 4;
pub const DIGIT_COUNT: usize = 4;
pub const CODE_LEN: usize = LETTER_COUNT + DIGIT_COUNT;

/// Generates an access code from a freshly OS-seeded generator.
pub fn generate_access_code() -> Result<String, AccessCodeError> {
    let mut rng = StdRng::try_from_os_rng()
        .map_err(|e| AccessCodeError::RandomSourceUnavailable(e.to_string()))?;
    Ok(generate_access_code_with(&mut rng))
}

/// Generates an access code from `rng`. Every position is drawn
/// independently and uniformly, with replacement.
pub fn generate_access_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(CODE_LEN);
    for _ in 0..LETTER_COUNT {
        code.push(LETTERS[rng.random_range(0..LETTERS.len())]);
    }
    for _ in 0..DIGIT_COUNT {
        code.push(DIGITS[rng.random_range(0..DIGITS.len())]);
    }
    code
}

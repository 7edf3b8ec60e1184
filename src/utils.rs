use crate::error::CubeError;
use crate::notation::{parse_moves, Face, Move, Turn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Scramble length used when the caller does not ask for one.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Picks a face uniformly and a modifier: prime half of the time, otherwise
/// double or plain with equal odds.
fn random_face_move(rng: &mut impl Rng) -> Move {
    let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
    let turn = if rng.gen_bool(0.5) {
        Turn::CounterClockwise
    } else if rng.gen_bool(0.5) {
        Turn::Half
    } else {
        Turn::Clockwise
    };
    Move::Face(face, turn)
}

/// Generates `length` random face turns. Never emits whole-cube rotations.
///
/// Consecutive moves may share a face; run the result through
/// [`simplify`](crate::simplify::simplify) for a cleaner display.
pub fn random_scramble(rng: &mut impl Rng, length: usize) -> Vec<Move> {
    (0..length).map(|_| random_face_move(rng)).collect()
}

/// Reproducible scramble: the same `seed` and `length` always give the same moves.
///
/// # Examples
///
/// ```
/// use beginner_cube::utils::scramble_with_seed;
///
/// let a = scramble_with_seed(514514, 20);
/// assert_eq!(a.len(), 20);
/// assert_eq!(a, scramble_with_seed(514514, 20));
/// ```
pub fn scramble_with_seed(seed: u64, length: usize) -> Vec<Move> {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_scramble(&mut rng, length)
}

/// Parses move lines as found in a scramble file.
///
/// Each line holds whitespace-separated tokens. Anything after a `#` is a
/// comment, and blank lines are skipped. The lines are concatenated in order.
///
/// # Arguments
/// * `lines`: The lines of the file, top to bottom.
///
/// # Returns
/// * `Ok(moves)` with every move of every line.
/// * `Err(CubeError)` for the first token that does not parse.
///
/// # Examples
/// ```
/// use beginner_cube::utils::moves_from_lines;
///
/// let moves = moves_from_lines(&["R U R' U'  # sexy move", "", "F2"]).unwrap();
/// assert_eq!(moves.len(), 5);
/// assert!(moves_from_lines(&["R Q"]).is_err());
/// ```
pub fn moves_from_lines(lines: &[&str]) -> Result<Vec<Move>, CubeError> {
    let mut moves = Vec::new();
    for line in lines {
        let code = line.split('#').next().unwrap_or("");
        moves.extend(parse_moves(code)?);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::format_moves;

    #[test]
    fn test_scramble_is_deterministic_per_seed() {
        assert_eq!(scramble_with_seed(1, 30), scramble_with_seed(1, 30));
        assert_ne!(scramble_with_seed(1, 30), scramble_with_seed(2, 30));
        assert!(scramble_with_seed(1, 0).is_empty());
    }

    #[test]
    fn test_scramble_uses_face_moves_only() {
        let moves = scramble_with_seed(7, 500);
        assert!(moves.iter().all(|m| matches!(m, Move::Face(_, _))));
        for face in Face::ALL {
            assert!(moves.iter().any(|m| *m == Move::Face(face, m.turn())), "face {} never drawn", face);
        }
    }

    #[test]
    fn test_scramble_modifier_distribution() {
        let moves = scramble_with_seed(3, 4000);
        let primes = moves.iter().filter(|m| m.turn() == Turn::CounterClockwise).count();
        let doubles = moves.iter().filter(|m| m.turn() == Turn::Half).count();
        // Expect about 2000 primes and 1000 doubles.
        assert!((1800..2200).contains(&primes), "primes: {}", primes);
        assert!((850..1150).contains(&doubles), "doubles: {}", doubles);
    }

    #[test]
    fn test_moves_from_lines() {
        let moves = moves_from_lines(&["# scramble", "R U", "  F2 y'  # trailing", ""]).unwrap();
        assert_eq!(format_moves(&moves), "R U F2 y'");
        assert_eq!(
            moves_from_lines(&["R U", "F3"]),
            Err(CubeError::InvalidNotation("F3".to_string()))
        );
        assert!(moves_from_lines(&[]).unwrap().is_empty());
    }
}

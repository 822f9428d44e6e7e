
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MatchError;
use crate::roster::{Group, Person};

/// Split a roster into randomly assembled groups of `group_size`.
///
/// Draws a uniform random permutation of the roster, then slices it into
/// contiguous chunks. The final group holds the remainder and may be smaller
/// than `group_size`. Group order and within-group order fall out of the
/// permutation and carry no meaning.
pub fn partition<R: Rng>(
    roster: &[Person],
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Group>, MatchError> {
    if group_size == 0 {
        return Err(MatchError::InvalidArgument(
            "group size must be a positive integer".to_string(),
        ));
    }

    let mut shuffled: Vec<Person> = roster.to_vec();
    shuffled.shuffle(rng);

    Ok(shuffled
        .chunks(group_size)
        .map(|chunk| chunk.to_vec())
        .collect())
}

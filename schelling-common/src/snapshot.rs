use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Agent positions recorded after one round of the segregation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// (x, y) position of every group-A agent at this round.
    pub group_a: Vec<(f32, f32)>,
    /// (x, y) position of every group-B agent at this round.
    pub group_b: Vec<(f32, f32)>,
}

/// Loads the ordered per-round snapshots from a bincode-encoded file.
///
/// Round order is the on-disk order; the round index of a snapshot is its
/// position in the returned vector. Group sizes may differ between groups
/// and across rounds.
pub fn load_rounds<P: AsRef<Path>>(path: P) -> Result<Vec<RoundSnapshot>> {
    let path_ref = path.as_ref();

    let file = File::open(path_ref)
        .with_context(|| format!("Failed to open locations file: {}", path_ref.display()))?;
    let reader = BufReader::new(file);
    let rounds: Vec<RoundSnapshot> = bincode::deserialize_from(reader)
        .with_context(|| format!("Failed to decode locations file: {}", path_ref.display()))?;

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_rounds() -> Vec<RoundSnapshot> {
        vec![
            RoundSnapshot {
                group_a: vec![(0.0, 0.0), (1.0, 2.0)],
                group_b: vec![(3.0, 4.0)],
            },
            RoundSnapshot {
                group_a: vec![(5.0, 6.0)],
                group_b: vec![(7.0, 8.0), (9.0, 10.0), (11.0, 12.0)],
            },
        ]
    }

    #[test]
    fn load_preserves_round_order_and_group_sizes() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        bincode::serialize_into(file.as_file(), &sample_rounds()).expect("encode rounds");

        let rounds = load_rounds(file.path()).expect("load rounds");
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].group_a.len(), 2);
        assert_eq!(rounds[0].group_b, vec![(3.0, 4.0)]);
        assert_eq!(rounds[1].group_a, vec![(5.0, 6.0)]);
        assert_eq!(rounds[1].group_b.len(), 3);
    }

    #[test]
    fn load_fails_on_missing_file() {
        assert!(load_rounds("does/not/exist.bin").is_err());
    }

    #[test]
    fn load_fails_on_corrupt_data() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0xFF; 7]).expect("write garbage");

        assert!(load_rounds(file.path()).is_err());
    }
}

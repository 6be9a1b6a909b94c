use anyhow::{bail, Result};
use rand::Rng;
use tracing::debug;

use super::Level;

/// The levels a round can be played on. A fresh round picks one at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    /// builds a level set, there must be at least one level
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            bail!("a level set needs at least one level");
        }
        for level in levels.iter() {
            level.validate()?;
        }
        Ok(LevelSet { levels })
    }

    /// picks a level uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Level {
        let index = rng.gen_range(0..self.levels.len());
        let level = &self.levels[index];
        debug!(index, name = %level.name, "chose level");
        level
    }

    #[allow(missing_docs)]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// always false, a level set can't be built empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(LevelSet::new(vec![]).is_err());
    }

    #[test]
    fn test_choose_eventually_picks_every_level() {
        let set = LevelSet::new(vec![
            Level::open("a", 3, 3),
            Level::open("b", 4, 4),
            Level::open("c", 5, 5),
        ])
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = vec![];
        for _ in 0..200 {
            let name = set.choose(&mut rng).name.clone();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_same_seed_same_level() {
        let set = LevelSet::new(vec![Level::open("a", 3, 3), Level::open("b", 4, 4)]).unwrap();
        let first = set.choose(&mut SmallRng::seed_from_u64(42)).clone();
        let second = set.choose(&mut SmallRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.get(1).map(|l| l.name.as_str()), Some("b"));
    }
}

//! Conway's B3/S23 rule

use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Maximum 8 neighbors in the Moore neighborhood
    pub const MAX_NEIGHBORS: usize = 8;

    /// A live cell dies of underpopulation (< 2) or overcrowding (> 3)
    pub fn should_die(neighbor_count: usize) -> bool {
        !(2..=3).contains(&neighbor_count)
    }

    /// A dead cell comes alive with exactly 3 neighbors
    pub fn should_be_born(neighbor_count: usize) -> bool {
        neighbor_count == 3
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: usize) -> bool {
        if current_state {
            !Self::should_die(neighbor_count)
        } else {
            Self::should_be_born(neighbor_count)
        }
    }

    /// The eight Moore offsets, row-major, skipping the cell itself
    pub fn neighbor_offsets() -> impl Iterator<Item = (isize, isize)> {
        iproduct!(-1..=1isize, -1..=1isize).filter(|&offset| offset != (0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 2)); // No birth with 2 neighbors
    }

    #[test]
    fn test_death_thresholds() {
        let dying: Vec<usize> = (0..=GameOfLifeRules::MAX_NEIGHBORS)
            .filter(|&n| GameOfLifeRules::should_die(n))
            .collect();
        assert_eq!(dying, vec![0, 1, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_neighbor_offsets() {
        let offsets: Vec<_> = GameOfLifeRules::neighbor_offsets().collect();
        assert_eq!(offsets.len(), GameOfLifeRules::MAX_NEIGHBORS);
        assert!(!offsets.contains(&(0, 0)));
        assert_eq!(offsets.first(), Some(&(-1, -1)));
        assert_eq!(offsets.last(), Some(&(1, 1)));
    }
}

//! Reproduction: two children per pair

use rand::Rng;

use crate::core::types::AgentId;
use crate::population::agent::Agent;
use crate::population::constants::MUTATION_PROBABILITY;
use crate::sampling::standard_normal;

/// Produce two children from a pair
///
/// Slot 0 of each child's alleles comes from `a` and slot 1 from `b`; each
/// slot is a uniformly chosen parental allele, or a fresh N(0,1) mutation
/// with probability [`MUTATION_PROBABILITY`]. Both children inherit
/// `a.wealth + b.wealth` as ancestral wealth and get ids `first_id` and
/// `first_id + 1`. Environment, education and wealth are left at 0.
pub fn mate<R: Rng + ?Sized>(a: &Agent, b: &Agent, first_id: AgentId, rng: &mut R) -> [Agent; 2] {
    let parent_wealth = a.wealth + b.wealth;
    let parents = [a.snapshot(), b.snapshot()];

    let mut child = |id: AgentId| {
        let alleles = [inherit_allele(a, rng), inherit_allele(b, rng)];
        Agent::new(id, alleles, parent_wealth, Some(Box::new(parents.clone())))
    };

    let first = child(first_id);
    let second = child(first_id.next());
    [first, second]
}

fn inherit_allele<R: Rng + ?Sized>(parent: &Agent, rng: &mut R) -> f64 {
    if rng.gen::<f64>() < MUTATION_PROBABILITY {
        standard_normal(rng)
    } else {
        parent.alleles()[rng.gen_range(0..2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn parent(id: u32, alleles: [f64; 2], wealth: f64) -> Agent {
        let mut agent = Agent::new(AgentId(id), alleles, 500.0, None);
        agent.wealth = wealth;
        agent
    }

    #[test]
    fn test_two_children_with_sequential_ids() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a = parent(0, [1.0, 2.0], 300.0);
        let b = parent(1, [3.0, 4.0], 700.0);

        let [c1, c2] = mate(&a, &b, AgentId(10), &mut rng);
        assert_eq!(c1.id, AgentId(10));
        assert_eq!(c2.id, AgentId(11));
    }

    #[test]
    fn test_ancestral_wealth_is_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a = parent(0, [1.0, 2.0], 300.0);
        let b = parent(1, [3.0, 4.0], 700.0);

        for child in mate(&a, &b, AgentId(0), &mut rng) {
            assert_eq!(child.parent_wealth, 1000.0);
            assert_eq!(child.wealth, 0.0);
            assert_eq!(child.env, 0.0);
        }
    }

    #[test]
    fn test_allele_slots_follow_parents() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a = parent(0, [1.0, 2.0], 1.0);
        let b = parent(1, [30.0, 40.0], 1.0);

        let mut mutations = 0;
        for i in 0..500 {
            for child in mate(&a, &b, AgentId(i * 2), &mut rng) {
                let [x, y] = child.alleles();
                if x != 1.0 && x != 2.0 {
                    mutations += 1;
                }
                if y != 30.0 && y != 40.0 {
                    mutations += 1;
                }
                assert_eq!(child.mean_allele(), (x + y) / 2.0);
            }
        }
        // 2000 slots at 1% each
        assert!(mutations > 0 && mutations < 60, "mutations {}", mutations);
    }

    #[test]
    fn test_parent_snapshots() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut a = parent(4, [1.0, 2.0], 300.0);
        a.education_score = 0.8;
        let b = parent(9, [3.0, 4.0], 700.0);

        let [child, _] = mate(&a, &b, AgentId(0), &mut rng);
        let parents = child.parents.as_ref().expect("child has parents");
        assert_eq!(parents[0].id, AgentId(4));
        assert_eq!(parents[1].id, AgentId(9));
        assert_eq!(parents[0].education_score, 0.8);
        assert_eq!(parents[1].wealth, 700.0);
        assert!(!child.is_founder());
    }
}
